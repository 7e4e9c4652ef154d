//! Toast notices: short messages that disappear on their own.

use crate::time::Countdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    expires: Countdown,
}

pub struct NoticeBoard {
    notices: Vec<Notice>,
    lifetime_ticks: u32,
}

/// Older notices are dropped beyond this.
const MAX_NOTICES: usize = 3;

impl NoticeBoard {
    pub fn new(lifetime_ticks: u32) -> Self {
        Self {
            notices: Vec::new(),
            lifetime_ticks,
        }
    }

    pub fn info(&mut self, title: &str, description: &str) {
        self.push(NoticeKind::Info, title, description);
    }

    pub fn error(&mut self, title: &str, description: &str) {
        self.push(NoticeKind::Error, title, description);
    }

    fn push(&mut self, kind: NoticeKind, title: &str, description: &str) {
        self.notices.push(Notice {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            expires: Countdown::new(self.lifetime_ticks),
        });
        if self.notices.len() > MAX_NOTICES {
            self.notices.remove(0);
        }
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        for notice in &mut self.notices {
            notice.expires.advance(delta_ticks);
        }
        self.notices.retain(|n| !n.expires.is_done());
    }

    pub fn dismiss_all(&mut self) {
        self.notices.clear();
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter().rev()
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_expire() {
        let mut board = NoticeBoard::new(5);
        board.error("Invalid file format", "Please upload a PDF or DOCX file.");
        board.tick(4);
        assert_eq!(board.latest().map(|n| n.kind), Some(NoticeKind::Error));
        board.tick(1);
        assert!(board.is_empty());
    }

    #[test]
    fn newest_is_listed_first() {
        let mut board = NoticeBoard::new(10);
        board.info("a", "");
        board.tick(3);
        board.info("b", "");
        let titles: Vec<&str> = board.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
        board.tick(7); // "a" expires, "b" has 3 ticks left
        assert_eq!(board.latest().map(|n| n.title.as_str()), Some("b"));
        assert_eq!(board.iter().count(), 1);
    }

    #[test]
    fn board_is_bounded() {
        let mut board = NoticeBoard::new(10);
        for i in 0..5 {
            board.info(&format!("n{i}"), "");
        }
        assert_eq!(board.iter().count(), MAX_NOTICES);
        assert_eq!(board.iter().last().map(|n| n.title.as_str()), Some("n2"));
    }

    #[test]
    fn dismiss() {
        let mut board = NoticeBoard::new(10);
        board.info("a", "");
        board.dismiss_all();
        assert!(board.is_empty());
    }
}
