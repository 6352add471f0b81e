/// Box metrics and visibility switches for a container of items plus an
/// overflow indicator.
pub trait OverflowLayout {
    /// Number of rendered items, in display order.
    fn item_count(&self) -> usize;

    fn set_item_visible(&mut self, index: usize, visible: bool);

    fn set_indicator_visible(&mut self, visible: bool);

    /// Height of the container's current content (scroll height).
    fn content_height(&self) -> u32;

    /// Height available inside the container (client height).
    fn available_height(&self) -> u32;

    fn fits(&self) -> bool {
        self.content_height() <= self.available_height()
    }
}

/// A layout whose container can be resized by size-change notifications.
pub trait ResizableLayout: OverflowLayout {
    fn resize(&mut self, available_height: u32);
}

/// Hides trailing items until the content fits and returns how many were
/// hidden.
///
/// Every pass starts from a clean slate (indicator hidden, all items shown),
/// so growing a container re-shows items hidden by an earlier pass and
/// re-running on a stable layout yields the same amount. The first item is
/// never hidden.
pub fn compute_overflow<L: OverflowLayout + ?Sized>(layout: &mut L) -> usize {
    let count = layout.item_count();

    layout.set_indicator_visible(false);
    for index in 0..count {
        layout.set_item_visible(index, true);
    }

    let mut amount = 0;
    for index in (1..count).rev() {
        if layout.fits() {
            break;
        }
        amount = count - index;
        layout.set_item_visible(index, false);
        layout.set_indicator_visible(true);
    }

    amount
}

/// Text for the overflow indicator, or `None` when nothing is hidden.
pub fn overflow_label(amount: usize) -> Option<String> {
    (amount > 0).then(|| format!("+{amount} more"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overflow::StackLayout;

    /// Ten-unit items and a ten-unit indicator, no gaps.
    fn layout(items: usize, available: u32) -> StackLayout {
        StackLayout::uniform(items, 10, available).with_indicator_height(10)
    }

    fn hidden_indices(layout: &StackLayout) -> Vec<usize> {
        (0..layout.item_count())
            .filter(|index| !layout.is_item_visible(*index))
            .collect()
    }

    #[test]
    fn test_zero_items() {
        let mut layout = layout(0, 0);
        assert_eq!(compute_overflow(&mut layout), 0);
        assert!(!layout.is_indicator_visible());
    }

    #[test]
    fn test_everything_fits() {
        let mut layout = layout(4, 100);
        assert_eq!(compute_overflow(&mut layout), 0);
        assert!(!layout.is_indicator_visible());
        assert!(hidden_indices(&layout).is_empty());
    }

    #[test]
    fn test_exact_fit() {
        let mut layout = layout(4, 40);
        assert_eq!(compute_overflow(&mut layout), 0);
        assert!(!layout.is_indicator_visible());
    }

    #[test]
    fn test_hides_trailing_items() {
        // Room for three items next to the indicator.
        let mut layout = layout(6, 40);

        let amount = compute_overflow(&mut layout);

        assert_eq!(amount, 3);
        assert!(layout.is_indicator_visible());
        assert_eq!(hidden_indices(&layout), vec![3, 4, 5]);
        assert!(layout.fits());
    }

    #[test]
    fn test_never_hides_first_item() {
        let mut layout = layout(5, 5);

        let amount = compute_overflow(&mut layout);

        assert_eq!(amount, 4);
        assert!(layout.is_item_visible(0));
        assert!(layout.is_indicator_visible());
        assert!(!layout.fits());
    }

    #[test]
    fn test_single_item_never_hidden() {
        let mut layout = layout(1, 5);
        assert_eq!(compute_overflow(&mut layout), 0);
        assert!(layout.is_item_visible(0));
        assert!(!layout.is_indicator_visible());
    }

    #[test]
    fn test_growing_container_reshows_items() {
        let mut layout = layout(6, 40);
        assert_eq!(compute_overflow(&mut layout), 3);

        layout.resize(60);
        assert_eq!(compute_overflow(&mut layout), 0);
        assert!(hidden_indices(&layout).is_empty());
        assert!(!layout.is_indicator_visible());
    }

    #[test]
    fn test_rerun_on_stable_layout_is_idempotent() {
        let mut layout = layout(6, 40);
        let first = compute_overflow(&mut layout);
        let second = compute_overflow(&mut layout);
        assert_eq!(first, second);
        assert_eq!(hidden_indices(&layout), vec![3, 4, 5]);
    }

    #[test]
    fn test_overflow_label() {
        assert_eq!(overflow_label(0), None);
        assert_eq!(overflow_label(3), Some("+3 more".to_string()));
    }
}
