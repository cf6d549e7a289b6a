//! Typed facade over the portal's remote operations.

use crate::config::TransportConfig;
use crate::digest::Credentials;
use crate::enums::Operation;
use crate::models::*;
use crate::transport::Transport;
use crate::{Error, Result};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

/// Path of the SOAP endpoint below the portal's base URL
pub const SERVICE_PATH: &str = "/pearson-rest/services/PublicPortalServiceJSON?wsdl";

/// Service account shared by every portal client
const PORTAL_LOGIN: &str = "pearson";
const PORTAL_PASSWORD: &str = "m0bApP5";

/// Include-list entry selecting the student record sections
const INCLUDE_STUDENT_DATA: i32 = 1;

/// Client of the PowerSchool public portal service.
///
/// One method per remote operation; each one sends its request record and
/// returns the decoded response record. An empty answer from the service
/// yields the response's `Default`.
#[derive(Debug, Clone)]
pub struct PortalService {
    transport: Transport,
}

impl PortalService {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Client for the portal at `base_url` (e.g. `https://ps.example.org`),
    /// authenticating with the portal's service account. Certificates are not
    /// verified, as with the mobile clients.
    pub fn for_server(base_url: &str) -> Self {
        let config =
            TransportConfig::new(service_url(base_url)).skip_certificate_verification(true);
        let credentials = Credentials::new(PORTAL_LOGIN, PORTAL_PASSWORD);
        Self::new(Transport::new(config, credentials))
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    fn invoke<Req, Resp>(&self, operation: Operation, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned + Default,
    {
        let mut response = Resp::default();
        self.transport
            .call(&operation.to_string(), request, &mut response)?;
        Ok(response)
    }

    //region operations

    pub fn get_credential_complexity_rules(
        &self,
        request: &GetCredentialComplexityRules,
    ) -> Result<GetCredentialComplexityRulesResponse> {
        self.invoke(Operation::GetCredentialComplexityRules, request)
    }

    pub fn logout_and_delink_device_token(
        &self,
        request: &LogoutAndDelinkDeviceToken,
    ) -> Result<LogoutAndDelinkDeviceTokenResponse> {
        self.invoke(Operation::LogoutAndDelinkDeviceToken, request)
    }

    pub fn get_student_data(&self, request: &GetStudentData) -> Result<GetStudentDataResponse> {
        self.invoke(Operation::GetStudentData, request)
    }

    pub fn login(&self, request: &Login) -> Result<LoginResponse> {
        self.invoke(Operation::Login, request)
    }

    pub fn send_password_recovery_email(
        &self,
        request: &SendPasswordRecoveryEmail,
    ) -> Result<SendPasswordRecoveryEmailResponse> {
        self.invoke(Operation::SendPasswordRecoveryEmail, request)
    }

    pub fn logout(&self, request: &Logout) -> Result<LogoutResponse> {
        self.invoke(Operation::Logout, request)
    }

    pub fn login_to_public_portal(
        &self,
        request: &LoginToPublicPortal,
    ) -> Result<LoginToPublicPortalResponse> {
        self.invoke(Operation::LoginToPublicPortal, request)
    }

    pub fn recover_username(&self, request: &RecoverUsername) -> Result<RecoverUsernameResponse> {
        self.invoke(Operation::RecoverUsername, request)
    }

    pub fn link_device_token_to_user(
        &self,
        request: &LinkDeviceTokenToUser,
    ) -> Result<LinkDeviceTokenToUserResponse> {
        self.invoke(Operation::LinkDeviceTokenToUser, request)
    }

    pub fn get_student_photo(&self, request: &GetStudentPhoto) -> Result<GetStudentPhotoResponse> {
        self.invoke(Operation::GetStudentPhoto, request)
    }

    pub fn recover_password(&self, request: &RecoverPassword) -> Result<RecoverPasswordResponse> {
        self.invoke(Operation::RecoverPassword, request)
    }

    pub fn get_school_map_by_school_number(
        &self,
        request: &GetSchoolMapBySchoolNumber,
    ) -> Result<GetSchoolMapBySchoolNumberResponse> {
        self.invoke(Operation::GetSchoolMapBySchoolNumber, request)
    }

    pub fn store_notification_settings(
        &self,
        request: &StoreNotificationSettings,
    ) -> Result<StoreNotificationSettingsResponse> {
        self.invoke(Operation::StoreNotificationSettings, request)
    }

    pub fn store_course_requests(
        &self,
        request: &StoreCourseRequests,
    ) -> Result<StoreCourseRequestsResponse> {
        self.invoke(Operation::StoreCourseRequests, request)
    }

    pub fn get_all_course_requests(
        &self,
        request: &GetAllCourseRequests,
    ) -> Result<GetAllCourseRequestsResponse> {
        self.invoke(Operation::GetAllCourseRequests, request)
    }

    pub fn get_start_stop_time_for_all_sections(
        &self,
        request: &GetStartStopTimeForAllSections,
    ) -> Result<GetStartStopTimeForAllSectionsResponse> {
        self.invoke(Operation::GetStartStopTimeForAllSections, request)
    }

    //endregion

    //region session helpers

    /// Log a portal user in.
    ///
    /// Returns the session to pass to later calls and the id of the first
    /// student linked to the account.
    ///
    /// # Errors
    /// `Rejected` if the portal answered with a message (bad credentials,
    /// disabled account...), `MissingData` if it returned no session or no
    /// student.
    pub fn create_user_session_and_student(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(UserSessionVO, i64)> {
        let request = LoginToPublicPortal {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        };

        let response = self.login_to_public_portal(&request)?;
        let (session, student_id) = session_from_results(response.result)?;

        info!(
            "portal session opened for user {:?}, student {}",
            session.user_id, student_id
        );
        Ok((session, student_id))
    }

    /// Log in and fetch the record of the account's first student
    pub fn get_student(&self, username: &str, password: &str) -> Result<StudentDataVO> {
        let (session, student_id) = self.create_user_session_and_student(username, password)?;

        let request = GetStudentData {
            user_session_vo: Some(session),
            student_ids: vec![student_id],
            qil: Some(QueryIncludeListVO::new([INCLUDE_STUDENT_DATA])),
            ..Default::default()
        };

        let response = self.get_student_data(&request)?;
        let results = response.result.ok_or(Error::MissingData("return"))?;
        debug!(
            "student {}: {} record(s) returned",
            student_id,
            results.student_data_vos.len()
        );

        results
            .student_data_vos
            .into_iter()
            .next()
            .ok_or(Error::MissingData("studentDataVOs"))
    }

    //endregion
}

/// `<base_url>` + [`SERVICE_PATH`], with trailing slashes of the base dropped
fn service_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SERVICE_PATH)
}

/// Session to reuse in later calls, built from a login result
fn session_from_results(results: Option<ResultsVO>) -> Result<(UserSessionVO, i64)> {
    let results = results.ok_or(Error::MissingData("return"))?;

    if let Some(message) = results.first_message() {
        return Err(Error::Rejected {
            title: message.title.clone().unwrap_or_default(),
            description: message.description.clone().unwrap_or_default(),
        });
    }

    let granted = results
        .user_session_vo
        .ok_or(Error::MissingData("userSessionVO"))?;
    let student_id = granted
        .student_ids
        .first()
        .copied()
        .map(i64::from)
        .ok_or(Error::MissingData("studentIDs"))?;

    let session = UserSessionVO {
        user_id: granted.user_id,
        service_ticket: granted.service_ticket,
        server_info: granted.server_info.map(|info| ServerInfo {
            api_version: info.api_version,
            ..Default::default()
        }),
        server_current_time: granted.server_current_time,
        user_type: granted.user_type,
        ..Default::default()
    };

    Ok((session, student_id))
}
