//! One-method-per-call façades over the dispatcher.
//!
//! Each trait covers one feature area and returns entities, never DTOs.
//! The `Live*` implementations share one `Arc<Dispatcher>`.

use std::sync::Arc;

use crate::dispatcher::Dispatcher;
use crate::dto::{
    CategoryRequest, CheckIdRequest, CreateNoticeRequest, DepartmentDto, DepartmentRequest,
    FcmTokenRequest, LogoDto, MyPageDto, NoticeDetailDto, NoticeSummaryDto, PartnerDto,
    PartnerRequest, SavedNoticeDto, SignInRequest, SignInResponseDto, SignUpRequest, TokenPairDto,
    UniversityDto,
};
use crate::endpoint::{
    HomeEndpoint, MemberEndpoint, NoticeEndpoint, NotificationEndpoint, PartnerEndpoint,
    UniversityEndpoint,
};
use crate::entity::{
    Announcement, Association, Bookmark, Department, HomeLogo, SignInSession, Store, TokenPair,
    University, UserProfile,
};
use crate::envelope::Empty;
use crate::error::{AuthError, NetworkError};
use crate::mapper::map_all;

pub trait SignInRepository: Send + Sync {
    fn sign_in(&self, request: &SignInRequest) -> Result<SignInSession, AuthError>;
}

pub trait MemberRepository: Send + Sync {
    fn sign_up(&self, request: &SignUpRequest) -> Result<Empty, NetworkError>;
    fn check_id(&self, login_id: &str) -> Result<Empty, NetworkError>;
    fn withdraw(&self) -> Result<Empty, NetworkError>;
    fn reissue(&self) -> Result<TokenPair, NetworkError>;
}

pub trait UniversityRepository: Send + Sync {
    fn universities(&self) -> Result<Vec<University>, NetworkError>;
    fn departments(&self, university_name: &str) -> Result<Vec<Department>, NetworkError>;
}

pub trait HomeRepository: Send + Sync {
    fn logo(&self) -> Result<HomeLogo, NetworkError>;
    fn unread_categories(&self) -> Result<Vec<Association>, NetworkError>;
    fn unread_notice_count(&self, association: Association) -> Result<i64, NetworkError>;
    fn recent_notices(&self, association: Association) -> Result<Vec<Announcement>, NetworkError>;
    fn saved_notices(&self) -> Result<Vec<Bookmark>, NetworkError>;
    fn my_page(&self) -> Result<UserProfile, NetworkError>;
}

pub trait NoticeRepository: Send + Sync {
    fn all(&self) -> Result<Vec<Announcement>, NetworkError>;
    fn all_by_category(&self, association: Association) -> Result<Vec<Announcement>, NetworkError>;
    fn saved_by_category(&self, association: Association)
        -> Result<Vec<Announcement>, NetworkError>;
    fn unread(&self, association: Association) -> Result<Vec<Announcement>, NetworkError>;
    fn detail(&self, id: i64) -> Result<Announcement, NetworkError>;
    fn mark_viewed(&self, id: i64) -> Result<Empty, NetworkError>;
    fn like(&self, id: i64) -> Result<Empty, NetworkError>;
    fn unlike(&self, id: i64) -> Result<Empty, NetworkError>;
    fn save(&self, id: i64) -> Result<Empty, NetworkError>;
    fn unsave(&self, id: i64) -> Result<Empty, NetworkError>;
    fn create(&self, request: &CreateNoticeRequest) -> Result<Empty, NetworkError>;
}

pub trait PartnerRepository: Send + Sync {
    fn stores(&self, category: &str) -> Result<Vec<Store>, NetworkError>;
}

pub trait NotificationRepository: Send + Sync {
    fn register_token(&self, fcm_token: &str) -> Result<Empty, NetworkError>;
}

#[derive(Debug, Clone)]
pub struct LiveMemberRepository {
    dispatcher: Arc<Dispatcher>,
}

impl LiveMemberRepository {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

impl SignInRepository for LiveMemberRepository {
    fn sign_in(&self, request: &SignInRequest) -> Result<SignInSession, AuthError> {
        let dto: SignInResponseDto = self
            .dispatcher
            .execute(&MemberEndpoint::SignIn(request.clone()))?;
        Ok(dto.into())
    }
}

impl MemberRepository for LiveMemberRepository {
    fn sign_up(&self, request: &SignUpRequest) -> Result<Empty, NetworkError> {
        self.dispatcher
            .execute(&MemberEndpoint::SignUp(request.clone()))
    }

    fn check_id(&self, login_id: &str) -> Result<Empty, NetworkError> {
        self.dispatcher.execute(&MemberEndpoint::CheckId(CheckIdRequest {
            login_id: login_id.to_string(),
        }))
    }

    fn withdraw(&self) -> Result<Empty, NetworkError> {
        self.dispatcher.execute(&MemberEndpoint::Withdraw)
    }

    fn reissue(&self) -> Result<TokenPair, NetworkError> {
        let dto: TokenPairDto = self.dispatcher.execute(&MemberEndpoint::Reissue)?;
        Ok(dto.into())
    }
}

#[derive(Debug, Clone)]
pub struct LiveUniversityRepository {
    dispatcher: Arc<Dispatcher>,
}

impl LiveUniversityRepository {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

impl UniversityRepository for LiveUniversityRepository {
    fn universities(&self) -> Result<Vec<University>, NetworkError> {
        let dtos: Vec<UniversityDto> = self.dispatcher.execute(&UniversityEndpoint::Universities)?;
        Ok(map_all(dtos))
    }

    fn departments(&self, university_name: &str) -> Result<Vec<Department>, NetworkError> {
        let dtos: Vec<DepartmentDto> =
            self.dispatcher
                .execute(&UniversityEndpoint::Departments(DepartmentRequest {
                    university_name: university_name.to_string(),
                }))?;
        Ok(map_all(dtos))
    }
}

#[derive(Debug, Clone)]
pub struct LiveHomeRepository {
    dispatcher: Arc<Dispatcher>,
}

impl LiveHomeRepository {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

impl HomeRepository for LiveHomeRepository {
    fn logo(&self) -> Result<HomeLogo, NetworkError> {
        let dto: LogoDto = self.dispatcher.execute(&HomeEndpoint::Logo)?;
        Ok(dto.into())
    }

    fn unread_categories(&self) -> Result<Vec<Association>, NetworkError> {
        let labels: Vec<String> = self.dispatcher.execute(&HomeEndpoint::UnreadCategories)?;
        Ok(labels
            .iter()
            .map(|label| Association::from_label(label))
            .collect())
    }

    fn unread_notice_count(&self, association: Association) -> Result<i64, NetworkError> {
        self.dispatcher
            .execute(&HomeEndpoint::UnreadNoticeCount(association.into()))
    }

    fn recent_notices(&self, association: Association) -> Result<Vec<Announcement>, NetworkError> {
        let dtos: Vec<NoticeSummaryDto> = self
            .dispatcher
            .execute(&HomeEndpoint::RecentNotices(association.into()))?;
        Ok(map_all(dtos))
    }

    fn saved_notices(&self) -> Result<Vec<Bookmark>, NetworkError> {
        let dtos: Vec<SavedNoticeDto> = self.dispatcher.execute(&HomeEndpoint::SavedNotices)?;
        Ok(map_all(dtos))
    }

    fn my_page(&self) -> Result<UserProfile, NetworkError> {
        let dto: MyPageDto = self.dispatcher.execute(&HomeEndpoint::MyPage)?;
        Ok(dto.into())
    }
}

#[derive(Debug, Clone)]
pub struct LiveNoticeRepository {
    dispatcher: Arc<Dispatcher>,
}

impl LiveNoticeRepository {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    fn list(&self, endpoint: NoticeEndpoint) -> Result<Vec<Announcement>, NetworkError> {
        let dtos: Vec<NoticeSummaryDto> = self.dispatcher.execute(&endpoint)?;
        Ok(map_all(dtos))
    }
}

impl NoticeRepository for LiveNoticeRepository {
    fn all(&self) -> Result<Vec<Announcement>, NetworkError> {
        self.list(NoticeEndpoint::All)
    }

    fn all_by_category(&self, association: Association) -> Result<Vec<Announcement>, NetworkError> {
        self.list(NoticeEndpoint::AllByCategory(CategoryRequest::from(association)))
    }

    fn saved_by_category(
        &self,
        association: Association,
    ) -> Result<Vec<Announcement>, NetworkError> {
        self.list(NoticeEndpoint::SavedByCategory(CategoryRequest::from(association)))
    }

    fn unread(&self, association: Association) -> Result<Vec<Announcement>, NetworkError> {
        self.list(NoticeEndpoint::UnreadAll(CategoryRequest::from(association)))
    }

    fn detail(&self, id: i64) -> Result<Announcement, NetworkError> {
        let dto: NoticeDetailDto = self.dispatcher.execute(&NoticeEndpoint::Detail(id))?;
        Ok(dto.into())
    }

    fn mark_viewed(&self, id: i64) -> Result<Empty, NetworkError> {
        self.dispatcher.execute(&NoticeEndpoint::ViewCheck(id))
    }

    fn like(&self, id: i64) -> Result<Empty, NetworkError> {
        self.dispatcher.execute(&NoticeEndpoint::Like(id))
    }

    fn unlike(&self, id: i64) -> Result<Empty, NetworkError> {
        self.dispatcher.execute(&NoticeEndpoint::Unlike(id))
    }

    fn save(&self, id: i64) -> Result<Empty, NetworkError> {
        self.dispatcher.execute(&NoticeEndpoint::Save(id))
    }

    fn unsave(&self, id: i64) -> Result<Empty, NetworkError> {
        self.dispatcher.execute(&NoticeEndpoint::Unsave(id))
    }

    fn create(&self, request: &CreateNoticeRequest) -> Result<Empty, NetworkError> {
        self.dispatcher
            .execute(&NoticeEndpoint::Create(request.clone()))
    }
}

#[derive(Debug, Clone)]
pub struct LivePartnerRepository {
    dispatcher: Arc<Dispatcher>,
}

impl LivePartnerRepository {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

impl PartnerRepository for LivePartnerRepository {
    fn stores(&self, category: &str) -> Result<Vec<Store>, NetworkError> {
        let dtos: Vec<PartnerDto> = self.dispatcher.execute(&PartnerEndpoint::Stores(PartnerRequest {
            category_name: category.to_string(),
        }))?;
        Ok(map_all(dtos))
    }
}

#[derive(Debug, Clone)]
pub struct LiveNotificationRepository {
    dispatcher: Arc<Dispatcher>,
}

impl LiveNotificationRepository {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

impl NotificationRepository for LiveNotificationRepository {
    fn register_token(&self, fcm_token: &str) -> Result<Empty, NetworkError> {
        self.dispatcher
            .execute(&NotificationEndpoint::RegisterToken(FcmTokenRequest {
                fcm_token: fcm_token.to_string(),
            }))
    }
}
