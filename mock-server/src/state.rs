//! In-memory backend data, seeded with one member and a few notices.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

pub const SEED_LOGIN_ID: &str = "test";
pub const SEED_PASSWORD: &str = "123456";
pub const SEED_UNIVERSITY: &str = "Studing University";

/// Category labels in display order.
pub const CATEGORIES: [&str; 3] = ["총학생회", "단과대", "학과"];

#[derive(Clone, Debug)]
pub struct Member {
    pub id: i64,
    pub login_id: String,
    pub password: String,
    pub name: String,
    pub admission_number: String,
    pub student_num: String,
    pub university_name: String,
    pub department_name: String,
    pub role: String,
    pub student_card_image: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Unit that wrote the notice, e.g. `공과대학`.
    pub writer: String,
    /// One of `CATEGORIES`.
    pub category: String,
    pub tag: String,
    pub image: Option<String>,
    pub created_at: String,
    pub like_count: i64,
    pub save_count: i64,
    pub view_count: i64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: i64,
    pub partner_name: String,
    pub category: String,
    pub partner_description: String,
    pub partner_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub partner_logo: Option<String>,
}

#[derive(Debug, Default)]
pub struct Backend {
    pub members: HashMap<String, Member>,
    pub next_member_id: i64,
    /// Access token → login id.
    pub access_tokens: HashMap<String, String>,
    /// Refresh token → login id.
    pub refresh_tokens: HashMap<String, String>,
    pub notices: BTreeMap<i64, Notice>,
    pub next_notice_id: i64,
    pub likes: HashSet<(String, i64)>,
    pub saves: HashSet<(String, i64)>,
    pub views: HashSet<(String, i64)>,
    pub partners: Vec<Partner>,
    /// University → departments.
    pub universities: BTreeMap<String, Vec<String>>,
    /// Login id → push token.
    pub push_tokens: HashMap<String, String>,
}

impl Backend {
    pub fn seeded() -> Self {
        let mut backend = Backend {
            next_member_id: 1,
            next_notice_id: 1,
            ..Backend::default()
        };

        backend.universities.insert(
            SEED_UNIVERSITY.to_string(),
            vec!["컴퓨터공학과".to_string(), "경영학과".to_string()],
        );
        backend
            .universities
            .insert("Campus College".to_string(), vec!["디자인학과".to_string()]);

        backend.add_member(Member {
            id: 0,
            login_id: SEED_LOGIN_ID.to_string(),
            password: SEED_PASSWORD.to_string(),
            name: "Niro".to_string(),
            admission_number: "2021".to_string(),
            student_num: "20211234".to_string(),
            university_name: SEED_UNIVERSITY.to_string(),
            department_name: "컴퓨터공학과".to_string(),
            role: "ROLE_COUNCIL".to_string(),
            student_card_image: Vec::new(),
        });

        backend.add_notice(Notice {
            id: 0,
            title: "Welcome week".to_string(),
            content: "Orientation starts Monday.".to_string(),
            writer: "총학생회".to_string(),
            category: "총학생회".to_string(),
            tag: "공지".to_string(),
            image: None,
            created_at: "2024-01-01T00:00:00".to_string(),
            like_count: 0,
            save_count: 0,
            view_count: 0,
        });
        backend.add_notice(Notice {
            id: 0,
            title: "Engineering festival".to_string(),
            content: "Booths open at noon.".to_string(),
            writer: "공과대학".to_string(),
            category: "단과대".to_string(),
            tag: "행사".to_string(),
            image: Some("https://cdn.studing.test/notices/festival.jpg".to_string()),
            created_at: "2024-03-15T12:30:00".to_string(),
            like_count: 4,
            save_count: 1,
            view_count: 20,
        });
        backend.add_notice(Notice {
            id: 0,
            title: "Lab seminar".to_string(),
            content: "Room 301, 4pm.".to_string(),
            writer: "컴퓨터공학과".to_string(),
            category: "학과".to_string(),
            tag: "공지".to_string(),
            image: None,
            created_at: "2024-04-02T16:00:00".to_string(),
            like_count: 1,
            save_count: 0,
            view_count: 5,
        });

        backend.partners = vec![
            Partner {
                id: 1,
                partner_name: "Cafe Mori".to_string(),
                category: "카페".to_string(),
                partner_description: "10% off all drinks".to_string(),
                partner_address: "12 Campus-ro".to_string(),
                latitude: 37.5665,
                longitude: 126.978,
                partner_logo: Some("https://cdn.studing.test/partners/mori.png".to_string()),
            },
            Partner {
                id: 2,
                partner_name: "Noodle House".to_string(),
                category: "음식점".to_string(),
                partner_description: "Free extra noodles".to_string(),
                partner_address: "40 Campus-ro".to_string(),
                latitude: 37.5651,
                longitude: 126.9895,
                partner_logo: None,
            },
        ];

        backend
    }

    pub fn add_member(&mut self, mut member: Member) -> i64 {
        member.id = self.next_member_id;
        self.next_member_id += 1;
        let id = member.id;
        self.members.insert(member.login_id.clone(), member);
        id
    }

    pub fn add_notice(&mut self, mut notice: Notice) -> i64 {
        notice.id = self.next_notice_id;
        self.next_notice_id += 1;
        let id = notice.id;
        self.notices.insert(id, notice);
        id
    }

    /// Issue a fresh access/refresh pair for `login_id`.
    pub fn issue_tokens(&mut self, login_id: &str) -> (String, String) {
        let access = format!("access-{}", Uuid::new_v4().simple());
        let refresh = format!("refresh-{}", Uuid::new_v4().simple());
        self.access_tokens
            .insert(access.clone(), login_id.to_string());
        self.refresh_tokens
            .insert(refresh.clone(), login_id.to_string());
        (access, refresh)
    }

    /// Drop every token and per-member record of `login_id`.
    pub fn remove_member(&mut self, login_id: &str) {
        self.members.remove(login_id);
        self.access_tokens.retain(|_, owner| owner != login_id);
        self.refresh_tokens.retain(|_, owner| owner != login_id);
        self.likes.retain(|(owner, _)| owner != login_id);
        self.saves.retain(|(owner, _)| owner != login_id);
        self.views.retain(|(owner, _)| owner != login_id);
        self.push_tokens.remove(login_id);
    }

    pub fn is_unread(&self, login_id: &str, notice_id: i64) -> bool {
        !self.views.contains(&(login_id.to_string(), notice_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_member_and_notices() {
        let backend = Backend::seeded();
        assert_eq!(backend.members[SEED_LOGIN_ID].name, "Niro");
        assert_eq!(backend.notices.len(), 3);
        assert_eq!(backend.notices[&1].writer, "총학생회");
        assert_eq!(backend.next_notice_id, 4);
    }

    #[test]
    fn removing_member_revokes_tokens() {
        let mut backend = Backend::seeded();
        let (access, refresh) = backend.issue_tokens(SEED_LOGIN_ID);
        backend.likes.insert((SEED_LOGIN_ID.to_string(), 1));

        backend.remove_member(SEED_LOGIN_ID);
        assert!(!backend.access_tokens.contains_key(&access));
        assert!(!backend.refresh_tokens.contains_key(&refresh));
        assert!(backend.likes.is_empty());
    }
}
