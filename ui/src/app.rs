use crate::gel::GelView;
use crate::state::{provide_app_ctx, use_app_ctx};
use crate::theme::GLOBAL_CSS;
use app_shell::{GelInput, Theme};
use gel_core::GelGeometry;
use leptos::*;
use leptos_meta::*;
use mobility_engine::{default_band_styles, summary_rows, GelRun};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let store = provide_app_ctx().store;

    let initial = GelInput::default();
    let (samples_text, set_samples_text) = create_signal(initial.samples_text);
    let (control_text, set_control_text) = create_signal(initial.control_text);
    let (error, set_error) = create_signal::<Option<String>>(None);

    let run_gel = move |_| {
        let input = GelInput {
            samples_text: samples_text.get(),
            control_text: control_text.get(),
        };
        match input.validate() {
            Ok(set) => {
                let run = GelRun::compute(&set, GelGeometry::default());
                set_error.set(None);
                store.update(|s| {
                    s.mutate(|st| {
                        st.input = input;
                        st.run = Some(run);
                    })
                });
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let toggle_theme = move |_| {
        store.update(|s| {
            let next = s.state().theme.toggled();
            s.mutate(|st| st.theme = next);
        })
    };
    let undo = move |_| store.update(|s| s.undo());
    let redo = move |_| store.update(|s| s.redo());
    let can_undo = create_memo(move |_| store.with(|s| s.can_undo()));
    let can_redo = create_memo(move |_| store.with(|s| s.can_redo()));

    let theme_class = create_memo(move |_| {
        store.with(|s| match s.state().theme {
            Theme::Light => "gel-app light-theme".to_string(),
            Theme::Dark => "gel-app".to_string(),
        })
    });
    let theme_label = move || {
        store.with(|s| match s.state().theme {
            Theme::Dark => "Light",
            Theme::Light => "Dark",
        })
    };
    let title = create_memo(move |_| {
        store.with(|s| {
            s.state()
                .run
                .as_ref()
                .map(|r| r.title())
                .unwrap_or_else(|| "Gel Electrophoresis".to_string())
        })
    });

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Title text="rustygel"/>
        <div class=move || theme_class.get()>
            <header class="topbar panel">
                <div class="brand-mark">
                    <span class="brand-title">"rustygel"</span>
                    <span class="chip">"virtual gel electrophoresis"</span>
                </div>
                <div class="topbar-actions">
                    <button class="btn ghost" prop:disabled=move || !can_undo.get() on:click=undo>
                        "Undo"
                    </button>
                    <button class="btn ghost" prop:disabled=move || !can_redo.get() on:click=redo>
                        "Redo"
                    </button>
                    <button class="btn" on:click=toggle_theme>{theme_label}</button>
                </div>
            </header>
            <main class="gel-body">
                <section class="gel-card panel">
                    <div class="gel-meta">
                        <span class="pane-title">{move || title.get()}</span>
                    </div>
                    <GelView/>
                </section>
                <aside class="sidebar panel">
                    <div class="sidebar-section">
                        <div class="section-title">"Fragments"</div>
                        <div class="input-stack">
                            <label class="input-label" for="samples-input">
                                "Sample lengths (bp, comma-separated)"
                            </label>
                            <input
                                id="samples-input"
                                class="input-compact"
                                type="text"
                                prop:value=move || samples_text.get()
                                on:input=move |ev| set_samples_text.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="input-stack">
                            <label class="input-label" for="control-input">
                                "Control length (bp, optional)"
                            </label>
                            <input
                                id="control-input"
                                class="input-compact"
                                type="text"
                                prop:value=move || control_text.get()
                                on:input=move |ev| set_control_text.set(event_target_value(&ev))
                            />
                        </div>
                        <button class="btn primary" on:click=run_gel>"Run gel"</button>
                        {move || {
                            error
                                .get()
                                .map(|msg| view! { <div class="status-pill status-bad">{msg}</div> })
                        }}
                    </div>
                    <LegendPanel/>
                    <SummaryPanel/>
                </aside>
            </main>
        </div>
    }
}

#[component]
fn LegendPanel() -> impl IntoView {
    let store = use_app_ctx().store;
    view! {
        <div class="sidebar-section">
            <div class="section-title">"Lanes"</div>
            <div class="legend">
                {move || {
                    store.with(|s| match s.state().run.as_ref() {
                        Some(run) => {
                            let styles = default_band_styles(run);
                            run.lanes
                                .iter()
                                .zip(styles)
                                .map(|(lane, style)| {
                                    let label = if lane.is_control {
                                        format!("Lane {} (control): {} bp", lane.number, lane.length_bp)
                                    } else {
                                        format!("Lane {}: {} bp", lane.number, lane.length_bp)
                                    };
                                    view! {
                                        <div class="legend-row">
                                            <span
                                                class="legend-swatch"
                                                style=format!("background: {};", style.fill)
                                            ></span>
                                            <span>{label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }
                        None => {
                            view! { <div class="section-subtitle">"Run a batch to see lanes."</div> }
                                .into_view()
                        }
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn SummaryPanel() -> impl IntoView {
    let store = use_app_ctx().store;
    view! {
        <div class="sidebar-section">
            <div class="section-title">"Summary"</div>
            {move || {
                store.with(|s| match s.state().run.as_ref() {
                    Some(run) => {
                        let rows = summary_rows(run);
                        let has_control = run.control().is_some();
                        view! {
                            <div class="summary-table">
                                <div class="summary-head">
                                    <span>"Lane"</span>
                                    <span>"Length (bp)"</span>
                                    <span>"Mobility"</span>
                                    <span>"Distance (cm)"</span>
                                </div>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        let lane = if row.is_control {
                                            format!("{}*", row.lane)
                                        } else {
                                            row.lane.to_string()
                                        };
                                        let class = if row.is_control {
                                            "summary-row control-row"
                                        } else {
                                            "summary-row"
                                        };
                                        view! {
                                            <div class=class>
                                                <span>{lane}</span>
                                                <span>{row.length_bp}</span>
                                                <span>{format!("{:.3}", row.mobility)}</span>
                                                <span>{format!("{:.1}", row.distance_cm)}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                                {has_control
                                    .then(|| {
                                        view! { <div class="section-subtitle">"* control"</div> }
                                    })}
                            </div>
                        }
                            .into_view()
                    }
                    None => {
                        view! { <div class="section-subtitle">"No batch computed yet."</div> }
                            .into_view()
                    }
                })
            }}
        </div>
    }
}
