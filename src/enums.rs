use std::fmt::{self, Display, Formatter};

/// HTTP method (hashed into HA2)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HttpMethod<'a> {
    GET,
    #[default]
    POST,
    HEAD,
    OTHER(&'a str),
}

impl<'a> Display for HttpMethod<'a> {
    /// Convert to uppercase string
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OTHER(s) => s,
        })
    }
}

/// Remote operations exposed by the public portal service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetCredentialComplexityRules,
    LogoutAndDelinkDeviceToken,
    GetStudentData,
    Login,
    SendPasswordRecoveryEmail,
    Logout,
    LoginToPublicPortal,
    RecoverUsername,
    LinkDeviceTokenToUser,
    GetStudentPhoto,
    RecoverPassword,
    GetSchoolMapBySchoolNumber,
    StoreNotificationSettings,
    StoreCourseRequests,
    GetAllCourseRequests,
    GetStartStopTimeForAllSections,
}

impl Operation {
    pub const ALL: [Operation; 16] = [
        Operation::GetCredentialComplexityRules,
        Operation::LogoutAndDelinkDeviceToken,
        Operation::GetStudentData,
        Operation::Login,
        Operation::SendPasswordRecoveryEmail,
        Operation::Logout,
        Operation::LoginToPublicPortal,
        Operation::RecoverUsername,
        Operation::LinkDeviceTokenToUser,
        Operation::GetStudentPhoto,
        Operation::RecoverPassword,
        Operation::GetSchoolMapBySchoolNumber,
        Operation::StoreNotificationSettings,
        Operation::StoreCourseRequests,
        Operation::GetAllCourseRequests,
        Operation::GetStartStopTimeForAllSections,
    ];

    /// Operation name as declared by the service
    pub fn name(self) -> &'static str {
        match self {
            Operation::GetCredentialComplexityRules => "getCredentialComplexityRules",
            Operation::LogoutAndDelinkDeviceToken => "logoutAndDelinkDeviceToken",
            Operation::GetStudentData => "getStudentData",
            Operation::Login => "login",
            Operation::SendPasswordRecoveryEmail => "sendPasswordRecoveryEmail",
            Operation::Logout => "logout",
            Operation::LoginToPublicPortal => "loginToPublicPortal",
            Operation::RecoverUsername => "recoverUsername",
            Operation::LinkDeviceTokenToUser => "linkDeviceTokenToUser",
            Operation::GetStudentPhoto => "getStudentPhoto",
            Operation::RecoverPassword => "recoverPassword",
            Operation::GetSchoolMapBySchoolNumber => "getSchoolMapBySchoolNumber",
            Operation::StoreNotificationSettings => "storeNotificationSettings",
            Operation::StoreCourseRequests => "storeCourseRequests",
            Operation::GetAllCourseRequests => "getAllCourseRequests",
            Operation::GetStartStopTimeForAllSections => "getStartStopTimeForAllSections",
        }
    }
}

impl Display for Operation {
    /// Format as the SOAPAction value, `urn:<name>`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "urn:{}", self.name())
    }
}
