use tokio::sync::watch;

use super::measure::{compute_overflow, ResizableLayout};

/// Re-measures a layout whenever its container changes size and reports the
/// overflow amount to a renderer.
///
/// The renderer is called on the first measurement and afterwards only when
/// the amount changes.
pub struct OverflowObserver<L, R> {
    layout: L,
    render: R,
    amount: Option<usize>,
}

impl<L, R> OverflowObserver<L, R>
where
    L: ResizableLayout,
    R: FnMut(usize),
{
    pub fn new(layout: L, render: R) -> Self {
        Self {
            layout,
            render,
            amount: None,
        }
    }

    /// Measures at the current size.
    pub fn measure(&mut self) -> usize {
        let amount = compute_overflow(&mut self.layout);
        if self.amount != Some(amount) {
            self.amount = Some(amount);
            (self.render)(amount);
        }
        amount
    }

    /// Handles a size-change notification.
    pub fn notify(&mut self, available_height: u32) -> usize {
        self.layout.resize(available_height);
        self.measure()
    }

    /// The last measured amount, zero before the first measurement.
    pub fn amount(&self) -> usize {
        self.amount.unwrap_or(0)
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn into_layout(self) -> L {
        self.layout
    }

    /// Follows container sizes published on `sizes` until the sender is
    /// dropped, then hands the observer back.
    ///
    /// Only the latest size is measured; sizes published while a pass is
    /// pending are superseded.
    pub async fn run(mut self, mut sizes: watch::Receiver<u32>) -> Self {
        let initial = *sizes.borrow_and_update();
        self.notify(initial);

        while sizes.changed().await.is_ok() {
            let height = *sizes.borrow_and_update();
            tracing::trace!(height, "Container resized");
            self.notify(height);
        }

        self
    }
}
