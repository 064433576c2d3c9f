use crate::error::{Result, SearchError};
use std::fmt;

/// One page of consecutive items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<'a, T> Page<'a, T> {
    pub fn items(&self) -> &'a [T] { self.items }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'a, T> { self.items.iter() }
}

impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Splits a slice into pages of at most `page_size` items, keeping order.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    pages: Vec<Page<'a, T>>,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(SearchError::ZeroPageSize);
        }
        let pages = items.chunks(page_size).map(|items| Page { items }).collect();
        Ok(Self { pages })
    }

    pub fn len(&self) -> usize { self.pages.len() }

    pub fn is_empty(&self) -> bool { self.pages.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Page<'a, T>> { self.pages.iter() }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = std::vec::IntoIter<Page<'a, T>>;

    fn into_iter(self) -> Self::IntoIter { self.pages.into_iter() }
}

pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Paginator<'_, T>> {
    Paginator::new(items, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_may_be_short() {
        let items = [1, 2, 3, 4, 5];
        let pages = paginate(&items, 2).unwrap();
        assert_eq!(pages.len(), 3);
        let sizes: Vec<usize> = pages.iter().map(Page::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(pages.into_iter().last().unwrap().items(), &[5]);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let items: [i32; 0] = [];
        assert!(paginate(&items, 3).unwrap().is_empty());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(paginate(&[1], 0).unwrap_err(), SearchError::ZeroPageSize);
    }

    #[test]
    fn page_displays_items_back_to_back() {
        let items = ["a", "b", "c"];
        let pages = paginate(&items, 2).unwrap();
        let rendered: Vec<String> = pages.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["ab", "c"]);
    }
}
