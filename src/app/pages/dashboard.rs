//! Dashboard page component.
//!
//! Lists batch-job runs. Data is fetched fresh on every mount and never
//! cached.

use admin_wire::{RunRecord, RunStatus};
use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::use_app_state;
use crate::app::use_services;

/// CSS class for a run status badge
fn status_class(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Success => "status-ok",
        RunStatus::Failure => "status-err",
        _ => "status-pending",
    }
}

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let services = use_services();
    let app = use_app_state();

    use_effect(move || app.set_title("Admin Dashboard"));

    let page_size = services.runs_page_size;
    let runs_api = services.api.clone();
    let mut runs = use_resource(move || {
        let api = runs_api.clone();
        async move {
            api.list_runs_page(page_size)
                .await
                .map_err(|e| e.to_string())
        }
    });

    let user_api = services.api.clone();
    let user = use_resource(move || {
        let api = user_api.clone();
        async move { api.current_user().await.ok() }
    });

    let signed_in_as = user.read().clone().flatten().map(|u| u.name);

    let runs_content = match runs.read().clone() {
        None => rsx! {
            article { aria_busy: "true", "Loading runs..." }
        },
        Some(Err(error)) => rsx! {
            article {
                p { class: "status-err", "Could not load runs: {error}" }
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            article { p { "No batch jobs have run yet." } }
        },
        Some(Ok(list)) => rsx! {
            RunsTable { runs: list }
        },
    };

    rsx! {
        Layout {
            nav_active: "dashboard".to_string(),

            hgroup {
                h1 { "Dashboard" }
                if let Some(name) = signed_in_as {
                    p { "Signed in as {name}" }
                }
            }

            section { id: "runs",
                div { style: "display:flex;justify-content:space-between;align-items:center;",
                    h2 { "Batch job runs" }
                    button {
                        class: "outline",
                        onclick: move |_| runs.restart(),
                        "Refresh"
                    }
                }
                {runs_content}
            }
        }
    }
}

#[component]
fn RunsTable(runs: Vec<RunRecord>) -> Element {
    rsx! {
        div { class: "overflow-auto",
            table { class: "runs-table striped",
                thead {
                    tr {
                        th { "Job" }
                        th { "Sender" }
                        th { "Status" }
                        th { "Started" }
                        th { "Document" }
                    }
                }
                tbody {
                    for run in runs {
                        tr { key: "{run.job_id}",
                            td { code { "{run.job_id}" } }
                            td { "{run.sender_id}" }
                            td {
                                span { class: status_class(run.run_status()), "{run.status}" }
                            }
                            td { {run.started_at.format("%Y-%m-%d %H:%M UTC").to_string()} }
                            td { "{run.doc_filename}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(RunStatus::Success), "status-ok");
        assert_eq!(status_class(RunStatus::Failure), "status-err");
        assert_eq!(status_class(RunStatus::InProgress), "status-pending");
        assert_eq!(status_class(RunStatus::Unknown), "status-pending");
    }
}
