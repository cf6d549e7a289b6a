//! Request and response records of the public portal service.
//!
//! Every field is optional: the service leaves out whatever it has no value
//! for, and requests only carry what the caller filled in. Records sent back
//! to the service (the session, its locale, include lists, settings) are
//! `Serialize` and skip absent values; records the service only ever returns
//! are `Deserialize` only.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};

/// Namespace of the operation elements
pub const PORTAL_NS: &str = "http://publicportal.rest.powerschool.pearson.com/xsd";

/// Date-time as exchanged with the service
pub type Timestamp = DateTime<FixedOffset>;

/// `xmlns` attribute of a request element, always [`PORTAL_NS`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortalNamespace;

impl Serialize for PortalNamespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(PORTAL_NS)
    }
}

/// `xsd:dateTime` fields.
///
/// Accepts RFC 3339 and offset-less values (read as UTC); an empty or nil
/// element reads as `None`.
pub(crate) mod xsd_datetime {
    use super::Timestamp;
    use chrono::{DateTime, NaiveDateTime};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        let raw = match Option::<String>::deserialize(deserializer)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Some(ts));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Some(naive.and_utc().fixed_offset()))
            .map_err(|e| D::Error::custom(format!("invalid dateTime {:?}: {}", raw, e)))
    }
}

//region session

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "userSessionVO", rename_all = "camelCase", default)]
pub struct UserSessionVO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(with = "xsd_datetime", skip_serializing_if = "Option::is_none")]
    pub server_current_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_info: Option<ServerInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_ticket: Option<String>,
    #[serde(rename = "studentIDs", skip_serializing_if = "Vec::is_empty")]
    pub student_ids: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_light_savings: Option<i32>,
    #[serde(rename = "parentSAMLEndPoint", skip_serializing_if = "Option::is_none")]
    pub parent_saml_end_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_portal_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_portal_disabled_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_offset: Option<i32>,
    #[serde(with = "xsd_datetime", skip_serializing_if = "Option::is_none")]
    pub server_time: Option<Timestamp>,
    #[serde(rename = "studentSAMLEndPoint", skip_serializing_if = "Option::is_none")]
    pub student_saml_end_point: Option<String>,
    #[serde(rename = "teacherSAMLEndPoint", skip_serializing_if = "Option::is_none")]
    pub teacher_saml_end_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_name: Option<String>,
}

/// Java locale as serialized by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Locale {
    #[serde(rename = "ISO3Country", skip_serializing_if = "Option::is_none")]
    pub iso3_country: Option<String>,
    #[serde(rename = "ISO3Language", skip_serializing_if = "Option::is_none")]
    pub iso3_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_keys: Option<LocaleKeySet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_locale_attributes: Option<LocaleKeySet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_locale_keys: Option<LocaleKeySet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Java `Set` of locale keys; only its emptiness is transmitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleKeySet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
}

//endregion

//region shared records

/// Which sections of the student record to return
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryIncludeListVO {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<i32>,
}

impl QueryIncludeListVO {
    pub fn new(includes: impl Into<Vec<i32>>) -> Self {
        Self {
            includes: includes.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettingsVO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_all_students: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_alerts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_assignments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_attendance: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email_addresses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_and_att_summary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_student_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_announcements: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_now: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseRequestGroupVO {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<CourseRequestVO>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_advice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_course_count: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_course_count: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<CourseRequestVO>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseRequestVO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_hours: Option<f32>,
}

//endregion

//region results

/// Informational or error message attached to a result
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageVO {
    pub description: Option<String>,
    pub id: Option<String>,
    pub msg_code: Option<i32>,
    pub title: Option<String>,
}

impl MessageVO {
    /// True for nil placeholders the service emits in place of an empty list
    pub fn is_blank(&self) -> bool {
        self.description.is_none()
            && self.id.is_none()
            && self.msg_code.is_none()
            && self.title.is_none()
    }
}

/// Generic result of most operations
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultsVO {
    #[serde(rename = "messageVOs")]
    pub message_vos: Vec<MessageVO>,
    #[serde(rename = "courseRequestGroupsVOs")]
    pub course_request_groups_vos: Vec<CourseRequestGroupVO>,
    #[serde(rename = "courseRequestRulesVO")]
    pub course_request_rules_vo: Option<CourseRequestRulesVO>,
    #[serde(rename = "studentDataVOs")]
    pub student_data_vos: Vec<StudentDataVO>,
    #[serde(rename = "userSessionVO")]
    pub user_session_vo: Option<UserSessionVO>,
}

impl ResultsVO {
    /// First message carrying any content
    pub fn first_message(&self) -> Option<&MessageVO> {
        self.message_vos.iter().find(|m| !m.is_blank())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseRequestRulesVO {
    pub description: Option<String>,
    pub max_credits: Option<f64>,
    pub min_credits: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordResetVO {
    #[serde(rename = "messageVOs")]
    pub message_vos: Vec<MessageVO>,
    pub min_password_length: Option<i32>,
    pub service_ticket: Option<String>,
    pub successful: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialComplexityRulesVO {
    #[serde(rename = "messageVOs")]
    pub message_vos: Vec<MessageVO>,
    pub letters_and_num_required: Option<bool>,
    pub mix_of_case_required: Option<bool>,
    pub required_character_count: Option<i32>,
    pub special_character_required: Option<bool>,
    pub successful: Option<bool>,
}

//endregion

//region student data

/// Everything the portal knows about one student.
///
/// Element names follow the service schema; the aliases accept the names
/// some portal versions emit instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentDataVO {
    pub activities: Vec<ActivityVO>,
    pub archived_final_grades: Vec<ArchivedFinalGradeVO>,
    #[serde(alias = "AsmtCatVO")]
    pub assignment_categories: Vec<AsmtCatVO>,
    #[serde(alias = "AssignmentScoreVO")]
    pub assignment_scores: Vec<AssignmentScoreVO>,
    #[serde(alias = "AssignmentVO")]
    pub assignments: Vec<AssignmentVO>,
    #[serde(alias = "AttendancVO")]
    pub attendance: Vec<AttendanceVO>,
    #[serde(alias = "AttendanceCodeVO")]
    pub attendance_codes: Vec<AttendanceCodeVO>,
    pub bulletins: Vec<BulletinLite>,
    pub citizen_codes: Vec<CitizenCodeVO>,
    pub citizen_grades: Vec<CitizenGradeVO>,
    pub course_requests: Vec<CourseRequestVO>,
    pub enrollments: Vec<SectionEnrollmentVO>,
    pub fee_balance: Option<FeeBalanceVO>,
    pub fee_transactions: Vec<FeeTransactionVO>,
    pub fee_types: Vec<FeeTypeVO>,
    #[serde(alias = "finalGradeVO")]
    pub final_grades: Vec<FinalGradeVO>,
    pub grade_scales: Vec<GradeScaleVO>,
    pub lunch_transactions: Vec<LunchTransactionVO>,
    #[serde(alias = "notInSessionDayVO")]
    pub not_in_session_days: Vec<NotInSessionDayVO>,
    #[serde(rename = "notificationSettingsVO")]
    pub notification_settings_vo: Option<NotificationSettingsVO>,
    #[serde(alias = "PeriodVO")]
    pub periods: Vec<PeriodVO>,
    pub remote_schools: Vec<SchoolVO>,
    #[serde(alias = "ReportingTermsVO")]
    pub reporting_terms: Vec<ReportingTermVO>,
    #[serde(alias = "schoolVO")]
    pub schools: Vec<SchoolVO>,
    #[serde(alias = "SectionVO")]
    pub sections: Vec<SectionVO>,
    pub standards: Vec<StandardVO>,
    pub standards_grades: Vec<StandardGradeVO>,
    pub student: Option<StudentVO>,
    pub student_dcid: Option<i64>,
    pub student_id: Option<i64>,
    #[serde(alias = "TeacherVO")]
    pub teachers: Vec<TeacherVO>,
    #[serde(alias = "TermVO")]
    pub terms: Vec<TermVO>,
    pub year_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentVO {
    #[serde(rename = "currentGPA")]
    pub current_gpa: Option<String>,
    pub current_meal_balance: Option<f64>,
    pub current_term: Option<String>,
    pub dcid: Option<i64>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub dob: Option<Timestamp>,
    pub ethnicity: Option<String>,
    pub first_name: Option<String>,
    pub gender: Option<String>,
    pub grade_level: Option<i32>,
    pub guardian_access_disabled: Option<bool>,
    pub id: Option<i64>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub photo_date: Option<Timestamp>,
    pub starting_meal_balance: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityVO {
    pub category: Option<String>,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinalGradeVO {
    pub comment_value: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub date_stored: Option<Timestamp>,
    pub grade: Option<String>,
    pub id: Option<i64>,
    pub percent: Option<f64>,
    pub reporting_term_id: Option<i64>,
    pub sectionid: Option<i64>,
    pub store_type: Option<i32>,
}

/// Final grade from a previous year, with the course it was earned in
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArchivedFinalGradeVO {
    pub comment_value: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub date_stored: Option<Timestamp>,
    pub grade: Option<String>,
    pub id: Option<i64>,
    pub percent: Option<f64>,
    pub reporting_term_id: Option<i64>,
    pub sectionid: Option<i64>,
    pub store_type: Option<i32>,
    pub course_name: Option<String>,
    pub course_number: Option<String>,
    pub school_id: Option<i64>,
    pub sort_order: Option<i32>,
    pub store_code: Option<String>,
    pub teacher_name: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub term_end_date: Option<Timestamp>,
    pub term_id: Option<i64>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub term_start_date: Option<Timestamp>,
    pub year_id: Option<i64>,
}

/// Assignment category
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AsmtCatVO {
    pub abbreviation: Option<String>,
    pub description: Option<String>,
    pub grade_book_type: Option<i32>,
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentScoreVO {
    pub assignment_id: Option<i64>,
    pub collected: Option<bool>,
    pub comment: Option<String>,
    pub exempt: Option<bool>,
    pub grade_book_type: Option<i32>,
    pub id: Option<i64>,
    pub late: Option<bool>,
    pub letter_grade: Option<String>,
    pub missing: Option<bool>,
    pub percent: Option<String>,
    pub score: Option<String>,
    pub scoretype: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentVO {
    pub abbreviation: Option<String>,
    pub additional_category_ids: Vec<i32>,
    pub assignmentid: Option<i64>,
    pub category_id: Option<i32>,
    pub description: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub due_date: Option<Timestamp>,
    pub grade_book_type: Option<i32>,
    pub id: Option<i64>,
    pub includeinfinalgrades: Option<i32>,
    pub name: Option<String>,
    pub pointspossible: Option<f64>,
    pub publish_days_before_due: Option<i32>,
    pub publish_state: Option<i32>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub publishonspecificdate: Option<Timestamp>,
    pub publishscores: Option<i32>,
    pub section_dcid: Option<i64>,
    pub sectionid: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<i32>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceVO {
    pub ada_value_code: Option<f64>,
    pub ada_value_time: Option<f64>,
    pub adm_value: Option<f64>,
    pub att_codeid: Option<i64>,
    pub att_comment: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub att_date: Option<Timestamp>,
    pub att_flags: Option<i32>,
    pub att_interval: Option<i32>,
    pub att_mode_code: Option<String>,
    pub ccid: Option<i64>,
    pub id: Option<i64>,
    pub periodid: Option<i64>,
    pub schoolid: Option<i64>,
    pub studentid: Option<i64>,
    pub total_minutes: Option<f64>,
    pub transaction_type: Option<String>,
    pub yearid: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceCodeVO {
    pub att_code: Option<String>,
    pub code_type: Option<i32>,
    pub description: Option<String>,
    pub id: Option<i64>,
    pub schoolid: Option<i64>,
    pub sortorder: Option<i32>,
    pub yearid: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CitizenCodeVO {
    pub code_name: Option<String>,
    pub description: Option<String>,
    pub id: Option<i64>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CitizenGradeVO {
    pub code_id: Option<i64>,
    pub reporting_term_id: Option<i64>,
    pub section_id: Option<i64>,
    pub store_type: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionEnrollmentVO {
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub end_date: Option<Timestamp>,
    pub enroll_status: Option<i32>,
    pub id: Option<i64>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub start_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeBalanceVO {
    pub balance: Option<f64>,
    pub credit: Option<f64>,
    pub debit: Option<f64>,
    pub id: Option<i64>,
    pub schoolid: Option<i64>,
    pub yearid: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeTransactionVO {
    pub adjustment: Option<f64>,
    pub course_name: Option<String>,
    pub course_number: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub creationdate: Option<Timestamp>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub date_value: Option<Timestamp>,
    pub department_name: Option<String>,
    pub description: Option<String>,
    pub fee_amount: Option<f64>,
    pub fee_balance: Option<f64>,
    pub fee_category_name: Option<String>,
    pub fee_paid: Option<f64>,
    pub fee_type_id: Option<i64>,
    pub fee_type_name: Option<String>,
    pub feecharged: Option<f64>,
    pub group_transaction_id: Option<i64>,
    pub id: Option<i64>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub modificationdate: Option<Timestamp>,
    pub originalfee: Option<f64>,
    pub priority: Option<i32>,
    pub pro_rated: Option<i32>,
    pub schoolfee_id: Option<i64>,
    pub schoolid: Option<i64>,
    pub termid: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeTypeVO {
    pub descript: Option<String>,
    pub fee_category_name: Option<String>,
    pub id: Option<i64>,
    pub school_number: Option<i32>,
    pub sort: Option<i32>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradeScaleVO {
    pub description: Option<String>,
    pub grade_book_type: Option<i32>,
    pub grade_scale_items: Vec<GradeScaleItemVO>,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub numeric: Option<i32>,
    pub numeric_max: Option<i32>,
    pub numeric_min: Option<i32>,
    pub numeric_precision: Option<i32>,
    pub numeric_scale: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradeScaleItemVO {
    pub cutoff_percent: Option<f64>,
    pub default_zero_cutoff: Option<bool>,
    pub description: Option<String>,
    pub grade_book_type: Option<i32>,
    pub grade_label: Option<String>,
    pub id: Option<i64>,
    pub percent_value: Option<f64>,
    pub points_value: Option<f64>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LunchTransactionVO {
    pub cash: Option<f64>,
    pub credit: Option<f64>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub date_value: Option<Timestamp>,
    pub debit: Option<f64>,
    pub description: Option<String>,
    pub id: Option<i64>,
    pub mealprice: Option<f64>,
    pub neteffect: Option<f64>,
    pub time: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotInSessionDayVO {
    pub cal_type: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub calendar_day: Option<Timestamp>,
    pub description: Option<String>,
    pub id: Option<i64>,
    pub school_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodVO {
    pub abbreviation: Option<String>,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub period_number: Option<i32>,
    pub schoolid: Option<i64>,
    pub sort_order: Option<i32>,
    pub yearid: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolVO {
    pub abbreviation: Option<String>,
    pub address: Option<String>,
    pub disabled_features: Option<DisabledFeaturesVO>,
    pub high_grade: Option<i32>,
    pub low_grade: Option<i32>,
    pub map_mime_type: Option<String>,
    pub name: Option<String>,
    pub school_disabled: Option<bool>,
    pub school_disabled_message: Option<String>,
    pub school_disabled_title: Option<String>,
    pub school_id: Option<i64>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub school_map_modified_date: Option<Timestamp>,
    pub school_number: Option<i64>,
    pub schooladdress: Option<String>,
    pub schoolcity: Option<String>,
    pub schoolcountry: Option<String>,
    pub schoolfax: Option<String>,
    pub schoolphone: Option<String>,
    pub schoolstate: Option<String>,
    pub schoolzip: Option<String>,
}

/// Portal features a school has switched off
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisabledFeaturesVO {
    pub activities: Option<bool>,
    pub assignments: Option<bool>,
    pub attendance: Option<bool>,
    pub citizenship: Option<bool>,
    pub current_gpa: Option<bool>,
    pub emailalerts: Option<bool>,
    pub fees: Option<bool>,
    pub final_grades: Option<bool>,
    pub meals: Option<bool>,
    pub standards: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportingTermVO {
    pub abbreviation: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub end_date: Option<Timestamp>,
    pub id: Option<i64>,
    pub schoolid: Option<i64>,
    pub sending_grades: Option<bool>,
    pub sort_order: Option<i32>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub start_date: Option<Timestamp>,
    pub suppress_grades: Option<bool>,
    pub suppress_percents: Option<bool>,
    pub termid: Option<i64>,
    pub title: Option<String>,
    pub yearid: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionVO {
    pub course_code: Option<String>,
    pub dcid: Option<i64>,
    pub description: Option<String>,
    pub enrollments: Vec<SectionEnrollmentVO>,
    pub expression: Option<String>,
    pub grade_book_type: Option<i32>,
    pub id: Option<i64>,
    pub period_sort: Option<i32>,
    pub room_name: Option<String>,
    pub school_course_title: Option<String>,
    pub school_number: Option<i64>,
    pub section_num: Option<String>,
    pub start_stop_dates: Vec<StartStopDateVO>,
    #[serde(rename = "teacherID")]
    pub teacher_id: Option<i64>,
    #[serde(rename = "termID")]
    pub term_id: Option<i64>,
}

/// Meeting window of a section, as returned by getStartStopTimeForAllSections
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartStopDateVO {
    pub section_enrollment_id: Option<i64>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub start: Option<Timestamp>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub stop: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandardVO {
    pub description: Option<String>,
    pub grade_book_type: Option<i32>,
    #[serde(rename = "gradeScaleID")]
    pub grade_scale_id: Option<i64>,
    pub id: Option<i64>,
    pub identifier: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "parentStandardID")]
    pub parent_standard_id: Option<i64>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandardGradeVO {
    pub comment: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub comment_last_updated: Option<Timestamp>,
    pub exempt: Option<i32>,
    pub grade_book_type: Option<i32>,
    pub grade_entered: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub grade_last_updated: Option<Timestamp>,
    pub grade_type: Option<i32>,
    pub id: Option<i64>,
    pub late: Option<i32>,
    pub missing: Option<i32>,
    pub reporting_term_id: Option<i64>,
    pub section_dcid: Option<i64>,
    pub section_id: Option<i64>,
    pub standard_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherVO {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub id: Option<i64>,
    pub last_name: Option<String>,
    pub school_phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TermVO {
    pub abbrev: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub end_date: Option<Timestamp>,
    pub id: Option<i64>,
    pub parent_term_id: Option<i64>,
    pub school_number: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub start_date: Option<Timestamp>,
    pub title: Option<String>,
}

/// School bulletin entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulletinLite {
    pub audience: Option<i64>,
    pub body: Option<String>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub end_date: Option<Timestamp>,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub school_id: Option<i64>,
    pub sort_order: Option<i32>,
    #[serde(deserialize_with = "xsd_datetime::deserialize")]
    pub start_date: Option<Timestamp>,
}

//endregion

//region operation requests

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "getCredentialComplexityRules", rename_all = "camelCase")]
pub struct GetCredentialComplexityRules {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "logoutAndDelinkDeviceToken", rename_all = "camelCase")]
pub struct LogoutAndDelinkDeviceToken {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(rename = "userSessionVO", skip_serializing_if = "Option::is_none")]
    pub user_session_vo: Option<UserSessionVO>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "getStudentData", rename_all = "camelCase")]
pub struct GetStudentData {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(rename = "userSessionVO", skip_serializing_if = "Option::is_none")]
    pub user_session_vo: Option<UserSessionVO>,
    #[serde(rename = "studentIDs", skip_serializing_if = "Vec::is_empty")]
    pub student_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qil: Option<QueryIncludeListVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "login", rename_all = "camelCase")]
pub struct Login {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "sendPasswordRecoveryEmail", rename_all = "camelCase")]
pub struct SendPasswordRecoveryEmail {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "logout", rename_all = "camelCase")]
pub struct Logout {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(rename = "userSessionVO", skip_serializing_if = "Option::is_none")]
    pub user_session_vo: Option<UserSessionVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "loginToPublicPortal", rename_all = "camelCase")]
pub struct LoginToPublicPortal {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "recoverUsername", rename_all = "camelCase")]
pub struct RecoverUsername {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "linkDeviceTokenToUser", rename_all = "camelCase")]
pub struct LinkDeviceTokenToUser {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(rename = "userSessionVO", skip_serializing_if = "Option::is_none")]
    pub user_session_vo: Option<UserSessionVO>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "getStudentPhoto", rename_all = "camelCase")]
pub struct GetStudentPhoto {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(rename = "userSessionVO", skip_serializing_if = "Option::is_none")]
    pub user_session_vo: Option<UserSessionVO>,
    #[serde(rename = "studentID", skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "recoverPassword", rename_all = "camelCase")]
pub struct RecoverPassword {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "getSchoolMapBySchoolNumber", rename_all = "camelCase")]
pub struct GetSchoolMapBySchoolNumber {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(rename = "userSessionVO", skip_serializing_if = "Option::is_none")]
    pub user_session_vo: Option<UserSessionVO>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "storeNotificationSettings", rename_all = "camelCase")]
pub struct StoreNotificationSettings {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(rename = "userSessionVO", skip_serializing_if = "Option::is_none")]
    pub user_session_vo: Option<UserSessionVO>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ns: Option<NotificationSettingsVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "storeCourseRequests", rename_all = "camelCase")]
pub struct StoreCourseRequests {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(rename = "userSessionVO", skip_serializing_if = "Option::is_none")]
    pub user_session_vo: Option<UserSessionVO>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub course_request_groups: Vec<CourseRequestGroupVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "getAllCourseRequests", rename_all = "camelCase")]
pub struct GetAllCourseRequests {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(rename = "userSessionVO", skip_serializing_if = "Option::is_none")]
    pub user_session_vo: Option<UserSessionVO>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "getStartStopTimeForAllSections", rename_all = "camelCase")]
pub struct GetStartStopTimeForAllSections {
    #[serde(rename = "@xmlns")]
    pub xmlns: PortalNamespace,
    #[serde(rename = "userSessionVO", skip_serializing_if = "Option::is_none")]
    pub user_session_vo: Option<UserSessionVO>,
    #[serde(rename = "studentIDs", skip_serializing_if = "Vec::is_empty")]
    pub student_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

//endregion

//region operation responses

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "getCredentialComplexityRulesResponse", default)]
pub struct GetCredentialComplexityRulesResponse {
    #[serde(rename = "return")]
    pub result: Option<CredentialComplexityRulesVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "logoutAndDelinkDeviceTokenResponse", default)]
pub struct LogoutAndDelinkDeviceTokenResponse {
    #[serde(rename = "return")]
    pub result: Option<ResultsVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "getStudentDataResponse", default)]
pub struct GetStudentDataResponse {
    #[serde(rename = "return")]
    pub result: Option<ResultsVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "loginResponse", default)]
pub struct LoginResponse {
    #[serde(rename = "return")]
    pub result: Option<ResultsVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "sendPasswordRecoveryEmailResponse", default)]
pub struct SendPasswordRecoveryEmailResponse {
    #[serde(rename = "return")]
    pub result: Option<MessageVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "logoutResponse", default)]
pub struct LogoutResponse {
    #[serde(rename = "return")]
    pub result: Option<ResultsVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "loginToPublicPortalResponse", default)]
pub struct LoginToPublicPortalResponse {
    #[serde(rename = "return")]
    pub result: Option<ResultsVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "recoverUsernameResponse", default)]
pub struct RecoverUsernameResponse {
    #[serde(rename = "return")]
    pub result: Option<MessageVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "linkDeviceTokenToUserResponse", default)]
pub struct LinkDeviceTokenToUserResponse {
    #[serde(rename = "return")]
    pub result: Option<MessageVO>,
}

/// Photo, base64 encoded as the service sends it
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "getStudentPhotoResponse", default)]
pub struct GetStudentPhotoResponse {
    #[serde(rename = "return")]
    pub result: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "recoverPasswordResponse", default)]
pub struct RecoverPasswordResponse {
    #[serde(rename = "return")]
    pub result: Option<PasswordResetVO>,
}

/// Map image, base64 encoded as the service sends it
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "getSchoolMapBySchoolNumberResponse", default)]
pub struct GetSchoolMapBySchoolNumberResponse {
    #[serde(rename = "return")]
    pub result: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "storeNotificationSettingsResponse", default)]
pub struct StoreNotificationSettingsResponse {
    #[serde(rename = "return")]
    pub result: Option<ResultsVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "storeCourseRequestsResponse", default)]
pub struct StoreCourseRequestsResponse {
    #[serde(rename = "return")]
    pub result: Option<ResultsVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "getAllCourseRequestsResponse", default)]
pub struct GetAllCourseRequestsResponse {
    #[serde(rename = "return")]
    pub result: Option<ResultsVO>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename = "getStartStopTimeForAllSectionsResponse", default)]
pub struct GetStartStopTimeForAllSectionsResponse {
    #[serde(rename = "return")]
    pub result: Option<ResultsVO>,
}

//endregion
