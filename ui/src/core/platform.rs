//! Host glue that differs between the browser and native builds.

use std::future::Future;

use unic_langid::LanguageIdentifier;

/// Languages the host reports for the user, most preferred first.
#[cfg(target_arch = "wasm32")]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Run a future without awaiting it.
///
/// On the web this queues onto the page's event loop. Native builds have no
/// host loop, so the future is driven to completion in place.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    futures::executor::block_on(fut);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn native_spawn_runs_to_completion() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        spawn_future(async move { flag.set(true) });
        assert!(ran.get());
    }
}
