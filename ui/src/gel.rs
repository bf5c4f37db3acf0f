use crate::state::use_app_ctx;
use leptos::*;

#[cfg(target_arch = "wasm32")]
use gel_frontend::GelHandle;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// The gel drawing surface. On the browser target this mounts a `GelHandle`
/// over the canvas and re-renders whenever the stored run changes; under SSR
/// it renders the empty stage and leaves drawing to hydration.
#[component]
pub fn GelView() -> impl IntoView {
    let store = use_app_ctx().store;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = &store;
    let canvas_id = "gel-canvas";

    #[cfg(target_arch = "wasm32")]
    {
        let handle = create_rw_signal::<Option<Rc<GelHandle>>>(None);

        create_effect(move |_| {
            let run_json = store.with(|s| {
                s.state()
                    .run
                    .as_ref()
                    .and_then(|r| serde_json::to_string(r).ok())
            });
            let h = match handle.get_untracked() {
                Some(h) => h,
                None => match GelHandle::new(canvas_id) {
                    Ok(created) => {
                        let rc = Rc::new(created);
                        handle.set(Some(rc.clone()));
                        rc
                    }
                    Err(err) => {
                        leptos::logging::error!("gel canvas init failed: {err:?}");
                        return;
                    }
                },
            };
            match run_json {
                Some(json) => {
                    if let Err(err) = h.set_run_json(&json) {
                        leptos::logging::error!("gel render failed: {err:?}");
                    }
                }
                None => h.clear(),
            }
        });

        on_cleanup(move || {
            if let Some(h) = handle.get_untracked() {
                h.destroy();
            }
        });
    }

    view! {
        <div class="gel-stage">
            <canvas id=canvas_id class="gel-canvas"></canvas>
        </div>
    }
}
