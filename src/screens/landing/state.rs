//! Resume skills shown on the landing screen, mirrored into the session store.

use crate::console;
use crate::store::{load_skills, save_skills, KeyValueStore};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillProfile {
    pub skills: Vec<String>,
    /// A resume has been processed this session.
    pub processed: bool,
}

impl SkillProfile {
    /// Restore from the store. Read errors leave an empty profile.
    pub fn load(store: &mut dyn KeyValueStore, key: &str) -> Self {
        match load_skills(store, key) {
            Ok(Some(skills)) => Self {
                skills,
                processed: true,
            },
            Ok(None) => Self::default(),
            Err(e) => {
                console::warn(&format!("could not read stored skills: {e}"));
                Self::default()
            }
        }
    }

    pub fn replace(&mut self, skills: Vec<String>, store: &mut dyn KeyValueStore, key: &str) {
        self.skills = skills;
        self.processed = true;
        self.persist(store, key);
    }

    /// Remove the skill at `index`; other skills keep their order.
    pub fn remove(&mut self, index: usize, store: &mut dyn KeyValueStore, key: &str) -> bool {
        if index >= self.skills.len() {
            return false;
        }
        self.skills.remove(index);
        self.persist(store, key);
        true
    }

    fn persist(&self, store: &mut dyn KeyValueStore, key: &str) {
        if let Err(e) = save_skills(store, key, &self.skills) {
            console::warn(&format!("could not store skills: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStore;
    use proptest::prelude::*;

    const KEY: &str = "resumeSkills";

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("QuotaExceededError".into()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn empty_store_means_not_processed() {
        let mut store = MemoryStore::new();
        let profile = SkillProfile::load(&mut store, KEY);
        assert!(!profile.processed);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn stored_list_marks_processed() {
        let mut store = MemoryStore::new();
        store.set(KEY, r#"["react","typescript"]"#).unwrap();
        let profile = SkillProfile::load(&mut store, KEY);
        assert!(profile.processed);
        assert_eq!(profile.skills, list(&["react", "typescript"]));
    }

    #[test]
    fn replace_writes_through() {
        let mut store = MemoryStore::new();
        let mut profile = SkillProfile::default();
        profile.replace(list(&["javascript", "react"]), &mut store, KEY);
        assert!(profile.processed);
        assert_eq!(load_skills(&mut store, KEY).unwrap(), Some(profile.skills.clone()));
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut store = MemoryStore::new();
        let mut profile = SkillProfile::default();
        profile.replace(list(&["react"]), &mut store, KEY);
        assert!(!profile.remove(3, &mut store, KEY));
        assert_eq!(profile.skills, list(&["react"]));
    }

    #[test]
    fn write_failure_keeps_memory_list() {
        let mut profile = SkillProfile::default();
        profile.replace(list(&["react", "typescript"]), &mut ReadOnlyStore, KEY);
        assert!(profile.remove(0, &mut ReadOnlyStore, KEY));
        assert_eq!(profile.skills, list(&["typescript"]));
    }

    proptest! {
        #[test]
        fn removal_drops_exactly_one_and_mirrors_store(
            skills in proptest::collection::vec("[a-z ]{1,12}", 1..10),
            pick in any::<proptest::sample::Index>(),
        ) {
            let mut store = MemoryStore::new();
            let mut profile = SkillProfile::default();
            profile.replace(skills.clone(), &mut store, KEY);

            let index = pick.index(skills.len());
            prop_assert!(profile.remove(index, &mut store, KEY));

            let mut expected = skills.clone();
            expected.remove(index);
            prop_assert_eq!(&profile.skills, &expected);
            prop_assert_eq!(load_skills(&mut store, KEY).unwrap(), Some(expected));
        }
    }
}
