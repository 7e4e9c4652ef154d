//! Static content: assessment questions, career entries and the canned
//! resume keywords.

use serde::Serialize;

#[derive(Debug)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub options: &'static [&'static str],
}

/// A career path shown on the results screen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CareerEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Match percentage, 0..=100.
    pub match_score: u8,
    pub salary: &'static str,
    pub growth: &'static str,
    pub education: &'static str,
    pub industries: &'static [&'static str],
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        id: 1,
        text: "Which of these activities do you enjoy the most?",
        options: &[
            "Solving complex problems or puzzles",
            "Creating or designing things",
            "Helping or teaching others",
            "Leading teams or organizing activities",
        ],
    },
    Question {
        id: 2,
        text: "In a work environment, which of these qualities do you value most?",
        options: &[
            "Innovation and creativity",
            "Structure and stability",
            "Collaboration and teamwork",
            "Independence and autonomy",
        ],
    },
    Question {
        id: 3,
        text: "Which of these skills do you feel most confident in?",
        options: &[
            "Analytical thinking and problem-solving",
            "Communication and interpersonal skills",
            "Technical and specialized knowledge",
            "Creative and artistic abilities",
        ],
    },
    Question {
        id: 4,
        text: "What type of work environment appeals to you most?",
        options: &[
            "Fast-paced and dynamic",
            "Structured and organized",
            "Collaborative and team-oriented",
            "Independent and autonomous",
        ],
    },
    Question {
        id: 5,
        text: "Which value is most important to you in your career?",
        options: &[
            "Making a positive impact on society",
            "Financial stability and growth",
            "Work-life balance and wellbeing",
            "Recognition and achievement",
        ],
    },
];

pub const CAREERS: [CareerEntry; 6] = [
    CareerEntry {
        id: 1,
        title: "UX/UI Designer",
        description: "Design and improve user interfaces and experiences for websites and applications.",
        match_score: 92,
        salary: "$75,000 - $120,000",
        growth: "13% (Faster than average)",
        education: "Bachelor's degree",
        industries: &["Technology", "Marketing", "E-commerce", "Entertainment", "Healthcare"],
    },
    CareerEntry {
        id: 2,
        title: "Data Scientist",
        description: "Analyze and interpret complex data to help organizations make better decisions.",
        match_score: 88,
        salary: "$95,000 - $150,000",
        growth: "22% (Much faster than average)",
        education: "Master's degree",
        industries: &["Technology", "Finance", "Healthcare", "Research", "Retail"],
    },
    CareerEntry {
        id: 3,
        title: "Digital Marketing Specialist",
        description: "Create and implement strategies to promote brands across digital platforms.",
        match_score: 85,
        salary: "$50,000 - $95,000",
        growth: "10% (Average)",
        education: "Bachelor's degree",
        industries: &["Marketing", "Advertising", "Technology", "Retail", "Entertainment"],
    },
    CareerEntry {
        id: 4,
        title: "Product Manager",
        description: "Guide product development from conception to launch, balancing user needs with business goals.",
        match_score: 81,
        salary: "$85,000 - $145,000",
        growth: "8% (Average)",
        education: "Bachelor's degree",
        industries: &["Technology", "E-commerce", "Finance", "Healthcare", "Entertainment"],
    },
    CareerEntry {
        id: 5,
        title: "Software Developer",
        description: "Design, create, and maintain software applications and systems.",
        match_score: 78,
        salary: "$70,000 - $140,000",
        growth: "25% (Much faster than average)",
        education: "Bachelor's degree",
        industries: &["Technology", "Finance", "Healthcare", "Retail", "Entertainment"],
    },
    CareerEntry {
        id: 6,
        title: "Human Resources Specialist",
        description: "Recruit, screen, and interview job applicants and facilitate employee relations.",
        match_score: 76,
        salary: "$50,000 - $90,000",
        growth: "7% (Average)",
        education: "Bachelor's degree",
        industries: &["Corporate", "Healthcare", "Education", "Government", "Non-profit"],
    },
];

/// Number of entries on the "Recommended" tab.
pub const RECOMMENDED_COUNT: usize = 3;

/// What the simulated resume analysis "extracts" from every file.
pub const MOCK_KEYWORDS: [&str; 6] = [
    "javascript",
    "react",
    "typescript",
    "user experience",
    "project management",
    "data analysis",
];

pub const ANALYSIS_STEPS: [&str; 3] = [
    "Identifying strengths",
    "Matching skills",
    "Ranking opportunities",
];

pub const NEXT_STEPS: [&str; 3] = [
    "Explore education requirements for your top matches",
    "Learn about specific skills needed for your preferred careers",
    "Discover professionals in your field for informational interviews",
];

/// Values shown under "Your Assessment Summary" (label, percent).
pub const VALUE_SUMMARY: [(&str, u16); 3] = [
    ("Creativity", 85),
    ("Problem-Solving", 75),
    ("Leadership", 60),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn every_question_has_four_options() {
        for q in &QUESTIONS {
            assert_eq!(q.options.len(), 4, "question {}", q.id);
        }
    }

    #[test]
    fn careers_are_ranked_by_score() {
        assert!(CAREERS.windows(2).all(|w| w[0].match_score >= w[1].match_score));
        assert!(CAREERS.iter().all(|c| c.match_score <= 100));
    }

    #[test]
    fn mock_keywords_are_distinct() {
        let mut sorted = MOCK_KEYWORDS.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), MOCK_KEYWORDS.len());
    }
}
