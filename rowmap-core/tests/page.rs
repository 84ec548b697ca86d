#[cfg(test)]
mod tests {
    use rowmap_core::{Page, Pageable, SimplePageable};

    #[test]
    fn total_pages_round_up() {
        assert_eq!(Page::<i32>::new(0, 1, 10, vec![]).total_pages(), 1);
        assert_eq!(Page::<i32>::new(1, 1, 10, vec![]).total_pages(), 1);
        assert_eq!(Page::<i32>::new(10, 1, 10, vec![]).total_pages(), 1);
        assert_eq!(Page::<i32>::new(11, 1, 10, vec![]).total_pages(), 2);
        assert_eq!(Page::<i32>::new(21, 1, 10, vec![]).total_pages(), 3);
    }

    #[test]
    fn empty_result_is_one_empty_page() {
        let page = Page::<i32>::new(0, 1, 20, vec![]);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(page.page_number(), 1);
        assert!(page.rows().is_empty());
        assert!(page.is_first_page());
        assert!(!page.has_prev_page());
        assert!(!page.has_next_page());
    }

    #[test]
    fn out_of_range_page_numbers_are_corrected() {
        let high = Page::<i32>::new(25, 99, 10, vec![]);
        assert_eq!(high.page_number(), 3);
        let low = Page::<i32>::new(25, 0, 10, vec![]);
        assert_eq!(low.page_number(), 1);
    }

    #[test]
    fn neighbour_pages_fall_back_to_one() {
        let middle = Page::<i32>::new(30, 2, 10, vec![]);
        assert_eq!(middle.prev_page(), 1);
        assert_eq!(middle.next_page(), 3);
        assert!(middle.has_prev_page());
        assert!(middle.has_next_page());

        let first = Page::<i32>::new(30, 1, 10, vec![]);
        assert_eq!(first.prev_page(), 1);
        assert_eq!(first.next_page(), 2);
        assert!(!first.has_prev_page());

        let last = Page::<i32>::new(30, 3, 10, vec![]);
        assert_eq!(last.prev_page(), 2);
        assert_eq!(last.next_page(), 1);
        assert!(!last.has_next_page());
        assert!(last.is_last_page());
    }

    #[test]
    fn single_page_is_first_not_last() {
        let page = Page::<i32>::new(5, 1, 10, vec![]);
        assert!(page.is_first_page());
        assert!(!page.is_last_page());
        assert!(!page.has_next_page());
    }

    #[test]
    fn offsets_follow_the_page_number() {
        let pageable = SimplePageable {
            page_number: 3,
            page_size: 20,
        };
        assert_eq!(pageable.offset(), 40);
        let first = SimplePageable {
            page_number: 1,
            page_size: 20,
        };
        assert_eq!(first.offset(), 0);
        // A zero page number does not underflow.
        let zero = SimplePageable {
            page_number: 0,
            page_size: 20,
        };
        assert_eq!(zero.offset(), 0);
    }

    #[test]
    fn from_pageable_carries_the_request() {
        let pageable = SimplePageable {
            page_number: 2,
            page_size: 2,
        };
        let page = Page::from_pageable(&pageable, 5, vec!["c", "d"]);
        assert_eq!(page.page_number(), 2);
        assert_eq!(page.limit(), 2);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.total_rows(), 5);
        assert_eq!(page.rows(), ["c", "d"]);
    }

    #[test]
    fn map_rows_keeps_the_paging_data() {
        let page = Page::new(5, 2, 2, vec![1, 2]).map_rows(|v| v * 10);
        assert_eq!(page.rows(), [10, 20]);
        assert_eq!(page.page_number(), 2);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn with_rows_replaces_only_the_rows() {
        let page = Page::new(5, 2, 2, vec![1, 2]);
        let replaced = page.with_rows(vec!["a", "b"]);
        assert_eq!(replaced.rows(), ["a", "b"]);
        assert_eq!(replaced.page_number(), page.page_number());
        assert_eq!(replaced.total_rows(), page.total_rows());
    }

    #[test]
    fn peek_visits_without_consuming() {
        let mut seen = Vec::new();
        let page = Page::new(3, 1, 10, vec![1, 2, 3]).peek(|v| seen.push(*v));
        assert_eq!(seen, [1, 2, 3]);
        assert_eq!(page.into_rows(), [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "page size must be positive")]
    fn zero_limit_is_rejected() {
        let _ = Page::<i32>::new(10, 1, 0, vec![]);
    }
}
