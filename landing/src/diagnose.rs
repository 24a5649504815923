//! Plant diagnosis demo.
//!
//! Nothing is analysed. Picking a sample or uploading a photo arms a timer,
//! and when it fires the canned answer for that source is shown.

use std::time::Duration;

use crate::config::{SAMPLE_ANALYSIS_DELAY, UPLOAD_ANALYSIS_DELAY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Warning,
}

impl HealthStatus {
    pub fn is_healthy(self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diagnosis {
    pub status: HealthStatus,
    /// Percent, 0..=100.
    pub confidence: u8,
    pub disease: Option<&'static str>,
    pub recommendations: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleImage {
    pub url: &'static str,
    pub name: &'static str,
    pub diagnosis: Diagnosis,
}

pub static SAMPLE_IMAGES: [SampleImage; 3] = [
    SampleImage {
        url: "https://images.pexels.com/photos/1459534/pexels-photo-1459534.jpeg",
        name: "Healthy Tomato Plant",
        diagnosis: Diagnosis {
            status: HealthStatus::Healthy,
            confidence: 94,
            disease: None,
            recommendations: &[
                "Continue current care routine",
                "Monitor for early signs of blight",
                "Maintain consistent watering",
            ],
        },
    },
    SampleImage {
        url: "https://images.pexels.com/photos/1300503/pexels-photo-1300503.jpeg",
        name: "Wheat Field",
        diagnosis: Diagnosis {
            status: HealthStatus::Warning,
            confidence: 87,
            disease: Some("Potential nutrient deficiency"),
            recommendations: &[
                "Apply nitrogen fertilizer",
                "Test soil pH levels",
                "Increase irrigation frequency",
            ],
        },
    },
    SampleImage {
        url: "https://images.pexels.com/photos/1459673/pexels-photo-1459673.jpeg",
        name: "Corn Crop",
        diagnosis: Diagnosis {
            status: HealthStatus::Healthy,
            confidence: 91,
            disease: None,
            recommendations: &[
                "Excellent growth conditions",
                "Continue monitoring",
                "Prepare for harvest in 3-4 weeks",
            ],
        },
    },
];

/// Answer given for every upload, whatever the picture shows.
pub const UPLOAD_DIAGNOSIS: Diagnosis = Diagnosis {
    status: HealthStatus::Healthy,
    confidence: 89,
    disease: None,
    recommendations: &[
        "Plant appears healthy",
        "Continue current care",
        "Monitor for changes",
    ],
};

/// Where the image under analysis came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// Index into [`SAMPLE_IMAGES`].
    Sample(usize),
    /// Object URL of a local file.
    Upload(String),
}

impl ImageSource {
    pub fn preview_url(&self) -> &str {
        match self {
            ImageSource::Sample(i) => SAMPLE_IMAGES.get(*i).map_or("", |s| s.url),
            ImageSource::Upload(url) => url,
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            ImageSource::Sample(_) => SAMPLE_ANALYSIS_DELAY,
            ImageSource::Upload(_) => UPLOAD_ANALYSIS_DELAY,
        }
    }

    pub fn diagnosis(&self) -> Diagnosis {
        match self {
            ImageSource::Sample(i) => SAMPLE_IMAGES
                .get(*i)
                .map_or(UPLOAD_DIAGNOSIS, |s| s.diagnosis),
            ImageSource::Upload(_) => UPLOAD_DIAGNOSIS,
        }
    }
}

/// Stamp for one analysis run. Only the latest ticket may finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Selected(ImageSource),
    Analyzing {
        source: ImageSource,
        ticket: Ticket,
    },
    Result {
        source: ImageSource,
        diagnosis: Diagnosis,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnoseDemo {
    phase: Phase,
    issued: u64,
}

impl DiagnoseDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn source(&self) -> Option<&ImageSource> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Selected(source)
            | Phase::Analyzing { source, .. }
            | Phase::Result { source, .. } => Some(source),
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, Phase::Analyzing { .. })
    }

    pub fn diagnosis(&self) -> Option<Diagnosis> {
        match self.phase {
            Phase::Result { diagnosis, .. } => Some(diagnosis),
            _ => None,
        }
    }

    /// Put a new image on the bench, dropping any previous result.
    pub fn select(&mut self, source: ImageSource) {
        self.phase = Phase::Selected(source);
    }

    /// Move a selected image into analysis. Returns the ticket to hand back
    /// to [`finish`](Self::finish) and how long to wait before doing so.
    pub fn analyze(&mut self) -> Option<(Ticket, Duration)> {
        match std::mem::take(&mut self.phase) {
            Phase::Selected(source) => Some(self.begin(source)),
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Select and start analysing in one step, which is what every UI entry
    /// point does.
    pub fn begin(&mut self, source: ImageSource) -> (Ticket, Duration) {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        let delay = source.delay();
        self.phase = Phase::Analyzing { source, ticket };
        (ticket, delay)
    }

    /// Deliver the canned result for `ticket`. Stale tickets are ignored.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        match std::mem::take(&mut self.phase) {
            Phase::Analyzing { source, ticket: current } if current == ticket => {
                let diagnosis = source.diagnosis();
                self.phase = Phase::Result { source, diagnosis };
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_idle_with_nothing_selected() {
        let demo = DiagnoseDemo::new();
        assert_eq!(demo.phase(), &Phase::Idle);
        assert_eq!(demo.source(), None);
        assert_eq!(demo.diagnosis(), None);
    }

    #[test]
    fn every_sample_yields_its_own_diagnosis() {
        for (i, sample) in SAMPLE_IMAGES.iter().enumerate() {
            let mut demo = DiagnoseDemo::new();
            demo.select(ImageSource::Sample(i));
            assert!(matches!(demo.phase(), Phase::Selected(_)));

            let (ticket, delay) = demo.analyze().unwrap();
            assert_eq!(delay, SAMPLE_ANALYSIS_DELAY);
            assert!(demo.is_analyzing());
            assert_eq!(demo.diagnosis(), None);

            assert!(demo.finish(ticket));
            assert_eq!(demo.diagnosis(), Some(sample.diagnosis));
            assert_eq!(demo.source().map(|s| s.preview_url()), Some(sample.url));
        }
    }

    #[test]
    fn uploads_always_get_the_fallback() {
        for url in ["blob:http://localhost/1", "blob:http://localhost/other"] {
            let mut demo = DiagnoseDemo::new();
            let (ticket, delay) = demo.begin(ImageSource::Upload(url.into()));
            assert_eq!(delay, UPLOAD_ANALYSIS_DELAY);
            assert!(demo.finish(ticket));
            assert_eq!(demo.diagnosis(), Some(UPLOAD_DIAGNOSIS));
            assert_eq!(demo.source().map(|s| s.preview_url()), Some(url));
        }
    }

    #[test]
    fn reselecting_clears_previous_result() {
        let mut demo = DiagnoseDemo::new();
        let (ticket, _) = demo.begin(ImageSource::Sample(1));
        demo.finish(ticket);
        assert!(demo.diagnosis().is_some());

        demo.begin(ImageSource::Sample(0));
        assert!(demo.is_analyzing());
        assert_eq!(demo.diagnosis(), None);
    }

    #[test]
    fn stale_timer_cannot_overwrite_newer_selection() {
        let mut demo = DiagnoseDemo::new();
        let (first, _) = demo.begin(ImageSource::Sample(0));
        let (second, _) = demo.begin(ImageSource::Sample(1));

        assert!(!demo.finish(first));
        assert!(demo.is_analyzing());

        assert!(demo.finish(second));
        assert_eq!(demo.diagnosis(), Some(SAMPLE_IMAGES[1].diagnosis));
        assert!(!demo.finish(second));
    }

    #[test]
    fn analyze_without_selection_is_a_no_op() {
        let mut demo = DiagnoseDemo::new();
        assert_eq!(demo.analyze(), None);
        assert_eq!(demo.phase(), &Phase::Idle);
    }

    #[test]
    fn warning_sample_reports_disease() {
        let wheat = &SAMPLE_IMAGES[1].diagnosis;
        assert!(!wheat.status.is_healthy());
        assert_eq!(wheat.disease, Some("Potential nutrient deficiency"));
        assert_eq!(wheat.confidence, 87);
    }
}
