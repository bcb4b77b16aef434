//! Front/back page pairing.
//!
//! Scanned card sheets come in pairs: page 1 with page 2, page 3 with page 4,
//! and so on. A trailing odd page forms a pair on its own.

/// Two consecutive pages, by 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePair {
    /// Index of the first page of the pair.
    pub first: usize,
    /// Index of the second page, absent for a trailing odd page.
    pub second: Option<usize>,
}

impl PagePair {
    /// Page indices in this pair, in order.
    pub fn pages(&self) -> impl Iterator<Item = usize> + use<> {
        std::iter::once(self.first).chain(self.second)
    }

    /// 1-based page number of the first page.
    pub fn first_number(&self) -> usize {
        self.first + 1
    }

    /// 1-based page number of the second page, if any.
    pub fn second_number(&self) -> Option<usize> {
        self.second.map(|i| i + 1)
    }
}

/// Iterator over [`PagePair`]s for a document of `count` pages.
#[derive(Debug, Clone)]
pub struct PagePairs {
    next: usize,
    count: usize,
}

/// Pair up `count` pages as `(0, 1), (2, 3), ...`.
pub fn page_pairs(count: usize) -> PagePairs {
    PagePairs { next: 0, count }
}

impl Iterator for PagePairs {
    type Item = PagePair;

    fn next(&mut self) -> Option<PagePair> {
        if self.next >= self.count {
            return None;
        }
        let first = self.next;
        let second = (first + 1 < self.count).then_some(first + 1);
        self.next = first + 2;
        Some(PagePair { first, second })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.next).div_ceil(2);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PagePairs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_no_pairs() {
        assert_eq!(page_pairs(0).count(), 0);
    }

    #[test]
    fn even_count_pairs_everything() {
        let pairs: Vec<PagePair> = page_pairs(4).collect();
        assert_eq!(
            pairs,
            vec![
                PagePair {
                    first: 0,
                    second: Some(1)
                },
                PagePair {
                    first: 2,
                    second: Some(3)
                },
            ]
        );
    }

    #[test]
    fn odd_count_leaves_last_page_alone() {
        let pairs: Vec<PagePair> = page_pairs(3).collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(
            pairs[1],
            PagePair {
                first: 2,
                second: None
            }
        );
    }

    #[test]
    fn single_page() {
        let pairs: Vec<PagePair> = page_pairs(1).collect();
        assert_eq!(
            pairs,
            vec![PagePair {
                first: 0,
                second: None
            }]
        );
    }

    #[test]
    fn pages_visits_every_index_once() {
        let all: Vec<usize> = page_pairs(5).flat_map(|p| p.pages()).collect();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn page_numbers_are_one_based() {
        let pair = page_pairs(4).nth(1).unwrap();
        assert_eq!(pair.first_number(), 3);
        assert_eq!(pair.second_number(), Some(4));
    }

    #[test]
    fn exact_size() {
        assert_eq!(page_pairs(5).len(), 3);
        let mut it = page_pairs(6);
        it.next();
        assert_eq!(it.len(), 2);
    }
}
