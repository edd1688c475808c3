//! Use cases called by view models.
//!
//! Each use case holds one repository behind an `Arc<dyn _>` and forwards
//! to it, so a view model can be handed the stub or the live repository.

use std::sync::Arc;

use crate::dto::{CreateNoticeRequest, SignInRequest, SignUpRequest};
use crate::entity::{
    Announcement, Association, Bookmark, Department, HomeLogo, SignInSession, Store, TokenPair,
    University, UserProfile,
};
use crate::envelope::Empty;
use crate::error::{AuthError, NetworkError};
use crate::repository::{
    HomeRepository, MemberRepository, NoticeRepository, NotificationRepository, PartnerRepository,
    SignInRepository, UniversityRepository,
};

#[derive(Clone)]
pub struct SignInUseCase {
    repository: Arc<dyn SignInRepository>,
}

impl SignInUseCase {
    pub fn new(repository: Arc<dyn SignInRepository>) -> Self {
        Self { repository }
    }

    pub fn sign_in(&self, login_id: &str, password: &str) -> Result<SignInSession, AuthError> {
        self.repository.sign_in(&SignInRequest {
            login_id: login_id.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct MemberUseCase {
    repository: Arc<dyn MemberRepository>,
}

impl MemberUseCase {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub fn sign_up(&self, request: &SignUpRequest) -> Result<Empty, NetworkError> {
        self.repository.sign_up(request)
    }

    pub fn check_id(&self, login_id: &str) -> Result<Empty, NetworkError> {
        self.repository.check_id(login_id)
    }

    pub fn withdraw(&self) -> Result<Empty, NetworkError> {
        self.repository.withdraw()
    }

    pub fn reissue(&self) -> Result<TokenPair, NetworkError> {
        self.repository.reissue()
    }
}

#[derive(Clone)]
pub struct UniversityUseCase {
    repository: Arc<dyn UniversityRepository>,
}

impl UniversityUseCase {
    pub fn new(repository: Arc<dyn UniversityRepository>) -> Self {
        Self { repository }
    }

    pub fn universities(&self) -> Result<Vec<University>, NetworkError> {
        self.repository.universities()
    }

    pub fn departments(&self, university_name: &str) -> Result<Vec<Department>, NetworkError> {
        self.repository.departments(university_name)
    }
}

#[derive(Clone)]
pub struct HomeUseCase {
    repository: Arc<dyn HomeRepository>,
}

impl HomeUseCase {
    pub fn new(repository: Arc<dyn HomeRepository>) -> Self {
        Self { repository }
    }

    pub fn logo(&self) -> Result<HomeLogo, NetworkError> {
        self.repository.logo()
    }

    pub fn unread_categories(&self) -> Result<Vec<Association>, NetworkError> {
        self.repository.unread_categories()
    }

    pub fn unread_notice_count(&self, association: Association) -> Result<i64, NetworkError> {
        self.repository.unread_notice_count(association)
    }

    pub fn recent_notices(&self, association: Association) -> Result<Vec<Announcement>, NetworkError> {
        self.repository.recent_notices(association)
    }

    pub fn saved_notices(&self) -> Result<Vec<Bookmark>, NetworkError> {
        self.repository.saved_notices()
    }

    pub fn my_page(&self) -> Result<UserProfile, NetworkError> {
        self.repository.my_page()
    }
}

#[derive(Clone)]
pub struct NoticeUseCase {
    repository: Arc<dyn NoticeRepository>,
}

impl NoticeUseCase {
    pub fn new(repository: Arc<dyn NoticeRepository>) -> Self {
        Self { repository }
    }

    pub fn all(&self) -> Result<Vec<Announcement>, NetworkError> {
        self.repository.all()
    }

    pub fn all_by_category(&self, association: Association) -> Result<Vec<Announcement>, NetworkError> {
        self.repository.all_by_category(association)
    }

    pub fn saved_by_category(
        &self,
        association: Association,
    ) -> Result<Vec<Announcement>, NetworkError> {
        self.repository.saved_by_category(association)
    }

    pub fn unread(&self, association: Association) -> Result<Vec<Announcement>, NetworkError> {
        self.repository.unread(association)
    }

    pub fn detail(&self, id: i64) -> Result<Announcement, NetworkError> {
        self.repository.detail(id)
    }

    pub fn mark_viewed(&self, id: i64) -> Result<Empty, NetworkError> {
        self.repository.mark_viewed(id)
    }

    pub fn like(&self, id: i64) -> Result<Empty, NetworkError> {
        self.repository.like(id)
    }

    pub fn unlike(&self, id: i64) -> Result<Empty, NetworkError> {
        self.repository.unlike(id)
    }

    pub fn save(&self, id: i64) -> Result<Empty, NetworkError> {
        self.repository.save(id)
    }

    pub fn unsave(&self, id: i64) -> Result<Empty, NetworkError> {
        self.repository.unsave(id)
    }

    pub fn create(&self, request: &CreateNoticeRequest) -> Result<Empty, NetworkError> {
        self.repository.create(request)
    }
}

#[derive(Clone)]
pub struct PartnerUseCase {
    repository: Arc<dyn PartnerRepository>,
}

impl PartnerUseCase {
    pub fn new(repository: Arc<dyn PartnerRepository>) -> Self {
        Self { repository }
    }

    pub fn stores(&self, category: &str) -> Result<Vec<Store>, NetworkError> {
        self.repository.stores(category)
    }
}

#[derive(Clone)]
pub struct NotificationUseCase {
    repository: Arc<dyn NotificationRepository>,
}

impl NotificationUseCase {
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self { repository }
    }

    pub fn register_token(&self, fcm_token: &str) -> Result<Empty, NetworkError> {
        self.repository.register_token(fcm_token)
    }
}
