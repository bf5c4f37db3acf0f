use app_shell::StateStore;
use leptos::*;

#[derive(Clone)]
pub struct AppCtx {
    pub store: RwSignal<StateStore>,
}

pub fn provide_app_ctx() -> AppCtx {
    let store = create_rw_signal(StateStore::with_default());
    let ctx = AppCtx { store };
    provide_context(ctx.clone());
    ctx
}

pub fn use_app_ctx() -> AppCtx {
    use_context::<AppCtx>().expect("AppCtx not provided")
}
