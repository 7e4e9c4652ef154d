//! Resume intake: file selection, simulated upload and keyword extraction.
//!
//! ```text
//! Idle ──select──▶ FileSelected ──start──▶ Uploading ──100%──▶ Processing ──▶ Done
//!  ▲                    │                                          │           │
//!  └──────remove────────┴──────────────── extraction failed ◀──────┘    remove/start
//! ```

use crate::catalog::MOCK_KEYWORDS;
use crate::config::AppConfig;
use crate::error::IntakeError;
use crate::input::SelectedFile;
use crate::notice::NoticeBoard;
use crate::time::Countdown;

pub const ACCEPTED_MIME_TYPES: [&str; 2] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Produces the skill keywords of an uploaded resume.
pub trait KeywordExtractor {
    fn extract(&self, file: &SelectedFile) -> Result<Vec<String>, IntakeError>;
}

/// Returns the same canned keywords for every file.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockExtractor;

impl KeywordExtractor for MockExtractor {
    fn extract(&self, _file: &SelectedFile) -> Result<Vec<String>, IntakeError> {
        Ok(MOCK_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum IntakeState {
    Idle,
    FileSelected(SelectedFile),
    Uploading {
        file: SelectedFile,
        progress: u8,
        step: Countdown,
    },
    Processing {
        file: SelectedFile,
        countdown: Countdown,
    },
    Done(SelectedFile),
}

/// What finished during a tick.
#[derive(Debug, PartialEq)]
pub enum IntakeEvent {
    Processed(Vec<String>),
    Failed(IntakeError),
}

pub struct ResumeIntake {
    pub state: IntakeState,
    extractor: Box<dyn KeywordExtractor>,
    step_ticks: u32,
    step_percent: u8,
    processing_ticks: u32,
}

impl ResumeIntake {
    pub fn new(config: &AppConfig, extractor: Box<dyn KeywordExtractor>) -> Self {
        Self {
            state: IntakeState::Idle,
            extractor,
            step_ticks: config.ticks(config.upload_step_ms),
            step_percent: config.upload_step_percent.clamp(1, 100),
            processing_ticks: config.ticks(config.processing_ms),
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        match &self.state {
            IntakeState::Idle => None,
            IntakeState::FileSelected(file)
            | IntakeState::Done(file)
            | IntakeState::Uploading { file, .. }
            | IntakeState::Processing { file, .. } => Some(file),
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            IntakeState::Uploading { .. } | IntakeState::Processing { .. }
        )
    }

    /// Upload progress, 0..=100. Full once processing has begun.
    pub fn upload_progress(&self) -> u8 {
        match &self.state {
            IntakeState::Uploading { progress, .. } => *progress,
            IntakeState::Processing { .. } | IntakeState::Done(_) => 100,
            _ => 0,
        }
    }

    pub fn select_file(
        &mut self,
        file: SelectedFile,
        notices: &mut NoticeBoard,
    ) -> Result<(), IntakeError> {
        if self.is_busy() {
            return Err(IntakeError::Busy);
        }
        if !ACCEPTED_MIME_TYPES.contains(&file.mime.as_str()) {
            notices.error("Invalid file format", "Please upload a PDF or DOCX file.");
            return Err(IntakeError::UnsupportedFormat(file.mime));
        }
        self.state = IntakeState::FileSelected(file);
        Ok(())
    }

    pub fn remove_file(&mut self) -> bool {
        match self.state {
            IntakeState::FileSelected(_) | IntakeState::Done(_) => {
                self.state = IntakeState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn start(&mut self) -> Result<(), IntakeError> {
        let file = match &self.state {
            IntakeState::FileSelected(file) | IntakeState::Done(file) => file.clone(),
            IntakeState::Idle => return Err(IntakeError::NoFile),
            _ => return Err(IntakeError::Busy),
        };
        self.state = IntakeState::Uploading {
            file,
            progress: 0,
            step: Countdown::new(self.step_ticks),
        };
        Ok(())
    }

    /// Advance the simulation. Notices for the outcome are posted here; the
    /// returned event tells the caller what to do with the result.
    pub fn tick(&mut self, delta_ticks: u32, notices: &mut NoticeBoard) -> Option<IntakeEvent> {
        let mut event = None;
        for _ in 0..delta_ticks {
            if let Some(e) = self.step(notices) {
                event = Some(e);
            }
            if !self.is_busy() {
                break;
            }
        }
        event
    }

    fn step(&mut self, notices: &mut NoticeBoard) -> Option<IntakeEvent> {
        match &mut self.state {
            IntakeState::Uploading { file, progress, step } => {
                if step.advance(1) {
                    if *progress >= 100 {
                        self.state = IntakeState::Processing {
                            file: file.clone(),
                            countdown: Countdown::new(self.processing_ticks),
                        };
                    } else {
                        *progress = progress.saturating_add(self.step_percent).min(100);
                        *step = Countdown::new(self.step_ticks);
                    }
                }
                None
            }
            IntakeState::Processing { file, countdown } => {
                if !countdown.advance(1) {
                    return None;
                }
                let file = file.clone();
                Some(self.finish(file, notices))
            }
            _ => None,
        }
    }

    fn finish(&mut self, file: SelectedFile, notices: &mut NoticeBoard) -> IntakeEvent {
        match self.extractor.extract(&file) {
            Ok(keywords) => {
                self.state = IntakeState::Done(file);
                notices.info(
                    "Resume processed successfully",
                    "Your career recommendations have been updated based on your resume.",
                );
                IntakeEvent::Processed(keywords)
            }
            Err(err) => {
                self.state = IntakeState::Idle;
                notices.error(
                    "Processing failed",
                    "There was an error processing your resume. Please try again.",
                );
                IntakeEvent::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeKind;

    struct FailingExtractor;

    impl KeywordExtractor for FailingExtractor {
        fn extract(&self, _file: &SelectedFile) -> Result<Vec<String>, IntakeError> {
            Err(IntakeError::Extraction("unreadable".into()))
        }
    }

    fn pdf() -> SelectedFile {
        SelectedFile::new("resume.pdf", "application/pdf", 20_480)
    }

    fn intake() -> ResumeIntake {
        ResumeIntake::new(&AppConfig::default(), Box::new(MockExtractor))
    }

    #[test]
    fn rejects_unsupported_type_and_keeps_state() {
        let mut i = intake();
        let mut notices = NoticeBoard::new(80);
        let err = i
            .select_file(SelectedFile::new("cv.txt", "text/plain", 10), &mut notices)
            .unwrap_err();
        assert_eq!(err, IntakeError::UnsupportedFormat("text/plain".into()));
        assert_eq!(i.state, IntakeState::Idle);
        let notice = notices.latest().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Invalid file format");
        assert_eq!(notice.description, "Please upload a PDF or DOCX file.");
    }

    #[test]
    fn rejected_file_does_not_replace_selection() {
        let mut i = intake();
        let mut notices = NoticeBoard::new(80);
        i.select_file(pdf(), &mut notices).unwrap();
        let _ = i.select_file(SelectedFile::new("a.png", "image/png", 1), &mut notices);
        assert_eq!(i.state, IntakeState::FileSelected(pdf()));
    }

    #[test]
    fn accepts_docx() {
        let mut i = intake();
        let mut notices = NoticeBoard::new(80);
        let docx = SelectedFile::new("cv.docx", ACCEPTED_MIME_TYPES[1], 5);
        assert!(i.select_file(docx, &mut notices).is_ok());
        assert!(notices.is_empty());
    }

    #[test]
    fn start_needs_a_file() {
        let mut i = intake();
        assert_eq!(i.start(), Err(IntakeError::NoFile));
    }

    #[test]
    fn upload_steps_by_ten_every_three_ticks() {
        let mut i = intake();
        let mut notices = NoticeBoard::new(80);
        i.select_file(pdf(), &mut notices).unwrap();
        i.start().unwrap();
        assert_eq!(i.upload_progress(), 0);
        i.tick(2, &mut notices);
        assert_eq!(i.upload_progress(), 0);
        i.tick(1, &mut notices);
        assert_eq!(i.upload_progress(), 10);
        i.tick(27, &mut notices);
        assert_eq!(i.upload_progress(), 100);
        assert!(matches!(i.state, IntakeState::Uploading { .. }));
        // 100% is held for one more step before processing begins
        i.tick(3, &mut notices);
        assert!(matches!(i.state, IntakeState::Processing { .. }));
    }

    #[test]
    fn busy_intake_refuses_changes() {
        let mut i = intake();
        let mut notices = NoticeBoard::new(80);
        i.select_file(pdf(), &mut notices).unwrap();
        i.start().unwrap();
        assert!(!i.remove_file());
        assert_eq!(i.start(), Err(IntakeError::Busy));
        assert_eq!(i.select_file(pdf(), &mut notices), Err(IntakeError::Busy));
    }

    #[test]
    fn full_run_yields_keywords() {
        let mut i = intake();
        let mut notices = NoticeBoard::new(80);
        i.select_file(pdf(), &mut notices).unwrap();
        i.start().unwrap();
        // 11 progress values held 3 ticks each, then 30 ticks of processing
        assert_eq!(i.tick(33 + 29, &mut notices), None);
        let event = i.tick(1, &mut notices);
        assert_eq!(
            event,
            Some(IntakeEvent::Processed(
                MOCK_KEYWORDS.iter().map(|k| k.to_string()).collect()
            ))
        );
        assert_eq!(i.state, IntakeState::Done(pdf()));
        assert_eq!(
            notices.latest().map(|n| n.title.as_str()),
            Some("Resume processed successfully")
        );
    }

    #[test]
    fn large_tick_runs_whole_pipeline() {
        let mut i = intake();
        let mut notices = NoticeBoard::new(80);
        i.select_file(pdf(), &mut notices).unwrap();
        i.start().unwrap();
        assert!(matches!(i.tick(500, &mut notices), Some(IntakeEvent::Processed(_))));
    }

    #[test]
    fn done_can_be_reprocessed_or_removed() {
        let mut i = intake();
        let mut notices = NoticeBoard::new(80);
        i.select_file(pdf(), &mut notices).unwrap();
        i.start().unwrap();
        i.tick(100, &mut notices);
        assert!(i.start().is_ok());
        i.tick(100, &mut notices);
        assert!(i.remove_file());
        assert_eq!(i.state, IntakeState::Idle);
        assert_eq!(i.file(), None);
    }

    #[test]
    fn extraction_failure_resets_to_idle() {
        let mut i = ResumeIntake::new(&AppConfig::default(), Box::new(FailingExtractor));
        let mut notices = NoticeBoard::new(80);
        i.select_file(pdf(), &mut notices).unwrap();
        i.start().unwrap();
        let event = i.tick(100, &mut notices);
        assert!(matches!(event, Some(IntakeEvent::Failed(IntakeError::Extraction(_)))));
        assert_eq!(i.state, IntakeState::Idle);
        let notice = notices.latest().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Processing failed");
    }
}
