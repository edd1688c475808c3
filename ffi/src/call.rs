//! JSON-described calls for hosts that cannot name Rust types.
//!
//! A call is `{"area": "...", "call": {"name": "...", "payload": ...}}`.
//! Parsing a response for a call yields the mapped entity as a JSON value,
//! `null` for acknowledgements.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use studing_core::dto::{
    DepartmentDto, LogoDto, MyPageDto, NoticeDetailDto, NoticeSummaryDto, PartnerDto,
    SavedNoticeDto, SignInResponseDto, TokenPairDto, UniversityDto,
};
use studing_core::entity::{
    Announcement, Association, Bookmark, Department, HomeLogo, SignInSession, Store, TokenPair,
    University, UserProfile,
};
use studing_core::mapper::map_all;
use studing_core::{
    Empty, Endpoint, EnvelopeData, HomeEndpoint, HttpResponse, MemberEndpoint, NetworkError,
    NoticeEndpoint, NotificationEndpoint, PartnerEndpoint, StudingClient, UniversityEndpoint,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "area", content = "call", rename_all = "camelCase")]
pub enum ApiCall {
    Member(MemberEndpoint),
    University(UniversityEndpoint),
    Home(HomeEndpoint),
    Notices(NoticeEndpoint),
    Partner(PartnerEndpoint),
    Notifications(NotificationEndpoint),
}

impl ApiCall {
    pub fn endpoint(&self) -> &dyn Endpoint {
        match self {
            ApiCall::Member(endpoint) => endpoint,
            ApiCall::University(endpoint) => endpoint,
            ApiCall::Home(endpoint) => endpoint,
            ApiCall::Notices(endpoint) => endpoint,
            ApiCall::Partner(endpoint) => endpoint,
            ApiCall::Notifications(endpoint) => endpoint,
        }
    }

    /// Decode `response` as the reply to this call and render the entity.
    pub fn parse(&self, client: &StudingClient, response: HttpResponse) -> Result<Value, NetworkError> {
        match self {
            ApiCall::Member(endpoint) => match endpoint {
                MemberEndpoint::SignIn(_) => entity::<SignInResponseDto, SignInSession>(client, response),
                MemberEndpoint::Reissue => entity::<TokenPairDto, TokenPair>(client, response),
                MemberEndpoint::SignUp(_) | MemberEndpoint::CheckId(_) | MemberEndpoint::Withdraw => {
                    ack(client, response)
                }
            },
            ApiCall::University(endpoint) => match endpoint {
                UniversityEndpoint::Universities => entities::<UniversityDto, University>(client, response),
                UniversityEndpoint::Departments(_) => entities::<DepartmentDto, Department>(client, response),
            },
            ApiCall::Home(endpoint) => match endpoint {
                HomeEndpoint::Logo => entity::<LogoDto, HomeLogo>(client, response),
                HomeEndpoint::UnreadCategories => {
                    let labels: Vec<String> = client.parse_response(response)?;
                    let categories: Vec<Association> =
                        labels.iter().map(|label| Association::from_label(label)).collect();
                    to_json(&categories)
                }
                HomeEndpoint::UnreadNoticeCount(_) => {
                    let count: i64 = client.parse_response(response)?;
                    Ok(Value::from(count))
                }
                HomeEndpoint::RecentNotices(_) => {
                    entities::<NoticeSummaryDto, Announcement>(client, response)
                }
                HomeEndpoint::SavedNotices => entities::<SavedNoticeDto, Bookmark>(client, response),
                HomeEndpoint::MyPage => entity::<MyPageDto, UserProfile>(client, response),
            },
            ApiCall::Notices(endpoint) => match endpoint {
                NoticeEndpoint::All
                | NoticeEndpoint::AllByCategory(_)
                | NoticeEndpoint::SavedByCategory(_)
                | NoticeEndpoint::UnreadAll(_) => {
                    entities::<NoticeSummaryDto, Announcement>(client, response)
                }
                NoticeEndpoint::Detail(_) => entity::<NoticeDetailDto, Announcement>(client, response),
                NoticeEndpoint::ViewCheck(_)
                | NoticeEndpoint::Like(_)
                | NoticeEndpoint::Unlike(_)
                | NoticeEndpoint::Save(_)
                | NoticeEndpoint::Unsave(_)
                | NoticeEndpoint::Create(_) => ack(client, response),
            },
            ApiCall::Partner(PartnerEndpoint::Stores(_)) => {
                entities::<PartnerDto, Store>(client, response)
            }
            ApiCall::Notifications(NotificationEndpoint::RegisterToken(_)) => ack(client, response),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, NetworkError> {
    serde_json::to_value(value).map_err(|e| NetworkError::Unknown(e.to_string()))
}

fn entity<D, E>(client: &StudingClient, response: HttpResponse) -> Result<Value, NetworkError>
where
    D: EnvelopeData,
    E: From<D> + Serialize,
{
    let dto: D = client.parse_response(response)?;
    to_json(&E::from(dto))
}

fn entities<D, E>(client: &StudingClient, response: HttpResponse) -> Result<Value, NetworkError>
where
    Vec<D>: EnvelopeData,
    E: From<D> + Serialize,
{
    let dtos: Vec<D> = client.parse_response(response)?;
    to_json(&map_all::<D, E>(dtos))
}

fn ack(client: &StudingClient, response: HttpResponse) -> Result<Value, NetworkError> {
    let Empty = client.parse_response::<Empty>(response)?;
    Ok(Value::Null)
}
