use leptos::prelude::*;

use crate::browser;
use crate::diagnose::{DiagnoseDemo, Diagnosis, ImageSource, SAMPLE_IMAGES};

#[component]
pub fn Diagnose() -> impl IntoView {
    let demo = RwSignal::new(DiagnoseDemo::new());
    // Object URL of the last upload, revoked once it is no longer shown
    let upload_url = StoredValue::new(None::<String>);

    let release_upload = move || {
        if let Some(Some(url)) = upload_url.try_update_value(Option::take) {
            browser::revoke_object_url(&url);
        }
    };
    on_cleanup(release_upload);

    let run = move |source: ImageSource| {
        let Some((ticket, delay)) = demo.try_update(|d| d.begin(source)) else {
            return;
        };
        tracing::debug!(?delay, "analysis started");
        set_timeout(
            move || {
                if demo.try_update(|d| d.finish(ticket)) == Some(true) {
                    tracing::debug!("analysis finished");
                }
            },
            delay,
        );
    };

    let on_upload = move |ev: leptos::ev::Event| {
        let Some(file) = browser::picked_file(&ev) else {
            return;
        };
        match browser::object_url(&file) {
            Ok(url) => {
                release_upload();
                upload_url.set_value(Some(url.clone()));
                tracing::info!(name = %file.name(), "analysing uploaded image");
                run(ImageSource::Upload(url));
            }
            Err(err) => tracing::warn!(%err, "could not preview upload"),
        }
    };

    let source = Memo::new(move |_| demo.with(|d| d.source().cloned()));

    let panel = move || match source.get() {
        None => view! {
            <div class="diagnose-empty">
                <div class="diagnose-empty-icon">"🔍"</div>
                <p>"Select an image to begin analysis"</p>
            </div>
        }
        .into_any(),
        Some(source) => view! {
            <div class="diagnose-active">
                <img src=source.preview_url().to_string() alt="Selected plant" class="diagnose-preview" />
                <Show when=move || demo.with(DiagnoseDemo::is_analyzing)>
                    <div class="diagnose-analyzing">
                        <span class="spinner">"🍃"</span>
                        <p>"Analyzing image with AI..."</p>
                    </div>
                </Show>
                {move || {
                    demo.with(DiagnoseDemo::diagnosis)
                        .map(|diagnosis| view! { <DiagnosisReport diagnosis=diagnosis /> })
                }}
            </div>
        }
        .into_any(),
    };

    view! {
        <section id="diagnose" class="diagnose">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"AI Plant Diagnosis Demo"</h2>
                    <p class="section-description">
                        "Experience our advanced AI-powered plant diagnosis system. "
                        "Upload an image or try our sample images to see instant analysis."
                    </p>
                </div>

                <div class="diagnose-grid">
                    <div class="diagnose-inputs reveal">
                        <div class="upload-box">
                            <div class="upload-icon">"⬆"</div>
                            <h3>"Upload Plant Image"</h3>
                            <p>"Upload a photo of your plant for instant AI analysis"</p>
                            <label class="btn btn-primary">
                                "📷 Choose Image"
                                <input type="file" accept="image/*" class="visually-hidden" on:change=on_upload />
                            </label>
                        </div>

                        <h4 class="samples-title">"Or try our sample images:"</h4>
                        <div class="samples-grid">
                            {SAMPLE_IMAGES
                                .iter()
                                .enumerate()
                                .map(|(i, sample)| {
                                    view! {
                                        <button
                                            class="sample"
                                            on:click=move |_| {
                                                release_upload();
                                                tracing::info!(sample = sample.name, "analysing sample image");
                                                run(ImageSource::Sample(i));
                                            }
                                        >
                                            <img src=sample.url alt=sample.name />
                                            <span class="sample-name">{sample.name}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="diagnose-results reveal">{panel}</div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DiagnosisReport(diagnosis: Diagnosis) -> impl IntoView {
    let healthy = diagnosis.status.is_healthy();
    let (icon, status_class) = if healthy {
        ("✓", "diagnosis-status status-healthy")
    } else {
        ("⚠", "diagnosis-status status-warning")
    };

    view! {
        <div class="diagnosis-report">
            <div class="diagnosis-header">
                <h4>"Diagnosis Results"</h4>
                <span class=status_class>
                    {icon} " " {format!("{}% Confidence", diagnosis.confidence)}
                </span>
            </div>
            {diagnosis.disease.map(|disease| view! {
                <div class="diagnosis-issue">
                    <p class="diagnosis-issue-label">"Detected Issue:"</p>
                    <p>{disease}</p>
                </div>
            })}
            <div class="diagnosis-recommendations">
                <p class="diagnosis-recommendations-label">"Recommendations:"</p>
                <ul>
                    {diagnosis.recommendations.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
