//! Resume state that outlives the landing screen.
//!
//! The app owns one `ResumeSession` and ticks it on every route, so an upload
//! started on the landing screen still finishes, persists its skills and
//! posts its notice after the user has moved on.

use crate::config::AppConfig;
use crate::console;
use crate::notice::NoticeBoard;
use crate::store::KeyValueStore;

use super::intake::{IntakeEvent, KeywordExtractor, ResumeIntake};
use super::state::SkillProfile;

pub struct ResumeSession {
    pub profile: SkillProfile,
    pub intake: ResumeIntake,
}

impl ResumeSession {
    /// Restore the skill list from `store` and start with an idle intake.
    pub fn new(
        config: &AppConfig,
        store: &mut dyn KeyValueStore,
        extractor: Box<dyn KeywordExtractor>,
    ) -> Self {
        Self {
            profile: SkillProfile::load(store, config.skills_key),
            intake: ResumeIntake::new(config, extractor),
        }
    }

    pub fn tick(
        &mut self,
        delta_ticks: u32,
        store: &mut dyn KeyValueStore,
        key: &str,
        notices: &mut NoticeBoard,
    ) {
        match self.intake.tick(delta_ticks, notices) {
            Some(IntakeEvent::Processed(keywords)) => self.profile.replace(keywords, store, key),
            Some(IntakeEvent::Failed(e)) => console::warn(&format!("resume processing failed: {e}")),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MOCK_KEYWORDS;
    use crate::input::SelectedFile;
    use crate::screens::landing::intake::{IntakeState, MockExtractor};
    use crate::store::{load_skills, MemoryStore};

    #[test]
    fn finished_upload_is_persisted() {
        let config = AppConfig::default();
        let mut store = MemoryStore::new();
        let mut notices = NoticeBoard::new(80);
        let mut session = ResumeSession::new(&config, &mut store, Box::new(MockExtractor));

        session
            .intake
            .select_file(
                SelectedFile::new("resume.pdf", "application/pdf", 2048),
                &mut notices,
            )
            .unwrap();
        session.intake.start().unwrap();
        session.tick(200, &mut store, config.skills_key, &mut notices);

        assert!(matches!(session.intake.state, IntakeState::Done(_)));
        assert!(session.profile.processed);
        assert_eq!(
            load_skills(&mut store, config.skills_key).unwrap(),
            Some(MOCK_KEYWORDS.map(String::from).to_vec())
        );
    }

    #[test]
    fn idle_session_leaves_store_alone() {
        let config = AppConfig::default();
        let mut store = MemoryStore::new();
        let mut notices = NoticeBoard::new(80);
        let mut session = ResumeSession::new(&config, &mut store, Box::new(MockExtractor));
        session.tick(100, &mut store, config.skills_key, &mut notices);
        assert_eq!(store.get(config.skills_key).unwrap(), None);
        assert!(notices.is_empty());
    }
}
