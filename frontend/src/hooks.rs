//! Reusable component hooks.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Debounce for the search input: each call resets the timer, and only the
/// last value within the window reaches `callback`. The sole place in the
/// app where requests are coalesced.
pub fn use_debounce<F>(delay_ms: u32, callback: F) -> impl Fn(String)
where
    F: Fn(String) + Clone + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move |value: String| {
        // Dropping the previous Timeout cancels it.
        pending.borrow_mut().take();

        let callback = callback.clone();
        let timeout = Timeout::new(delay_ms, move || callback(value));
        *pending.borrow_mut() = Some(timeout);
    }
}
