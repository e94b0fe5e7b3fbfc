//! Per-role projection specs and the selectors that choose between them.
//!
//! One fixed spec exists per role tier; the selector is a pure function
//! from role to spec. Field visibility is strictly monotonic across the
//! tiers: limited is a subset of semi-limited, which is a subset of full.

use once_cell::sync::Lazy;

use crate::model::user::Role;
use crate::projection::filters::RolePropertyFilter;
use crate::projection::spec::ProjectionSpec;

fn country_brief() -> ProjectionSpec {
    ProjectionSpec::new().leaf("id").leaf("name")
}

fn country_full() -> ProjectionSpec {
    ProjectionSpec::new().leaf("id").leaf("name").leaf("iso_code")
}

fn user_brief() -> ProjectionSpec {
    ProjectionSpec::new().leaf("id").leaf("created_date").leaf("updated_date")
}

fn user_full() -> ProjectionSpec {
    ProjectionSpec::new()
        .leaf("id")
        .leaf("username")
        .leaf("first_name")
        .leaf("last_name")
        .leaf("email")
        .leaf("role")
        .leaf("created_date")
        .leaf("updated_date")
}

fn review_status_items() -> ProjectionSpec {
    ProjectionSpec::new().leaf("id").leaf("review_status").leaf("comment")
}

/// The richest candidate spec: every intake and profile field plus nested
/// sub-projections for the attached record collections.
static FULL_CANDIDATE_SPEC: Lazy<ProjectionSpec> = Lazy::new(|| {
    ProjectionSpec::new()
        .leaf("id")
        .leaf("candidate_number")
        .leaf("status")
        .leaf("gender")
        .leaf("dob")
        .leaf("phone")
        .leaf("whatsapp")
        .leaf("address1")
        .leaf("city")
        .leaf("year_of_arrival")
        .leaf("additional_info")
        .leaf("candidate_message")
        .leaf("folderlink")
        .leaf("sflink")
        .leaf("videolink")
        .leaf("linked_in_link")
        .leaf("unhcr_status")
        .leaf("unhcr_number")
        .leaf("ielts_score")
        .leaf("survey_comment")
        .leaf("selected")
        .leaf("context_note")
        .leaf("created_date")
        .leaf("updated_date")
        .one("user", user_full())
        .one("country", country_full())
        .one("nationality", country_full())
        .one("max_education_level", ProjectionSpec::new().leaf("id").leaf("name").leaf("level"))
        .many(
            "candidate_occupations",
            ProjectionSpec::new()
                .leaf("id")
                .one("occupation", ProjectionSpec::new().leaf("id").leaf("name").leaf("isco08_code"))
                .leaf("years_experience"),
        )
        .many(
            "candidate_educations",
            ProjectionSpec::new()
                .leaf("id")
                .leaf("education_type")
                .one("country", country_brief())
                .leaf("institution")
                .leaf("course_name")
                .leaf("year_completed")
                .leaf("incomplete"),
        )
        .many(
            "candidate_exams",
            ProjectionSpec::new()
                .leaf("id")
                .leaf("exam")
                .leaf("other_exam")
                .leaf("score")
                .leaf("year"),
        )
        .many(
            "candidate_citizenships",
            ProjectionSpec::new()
                .leaf("id")
                .one("nationality", country_brief())
                .leaf("has_passport")
                .leaf("notes"),
        )
        .many(
            "candidate_dependants",
            ProjectionSpec::new()
                .leaf("id")
                .leaf("relation")
                .leaf("name")
                .leaf("dob")
                .leaf("registered"),
        )
        .many(
            "candidate_job_experiences",
            ProjectionSpec::new()
                .leaf("id")
                .leaf("company_name")
                .leaf("role")
                .leaf("start_date")
                .leaf("end_date")
                .leaf("full_time")
                .leaf("paid")
                .leaf("description"),
        )
        .many(
            "candidate_attachments",
            ProjectionSpec::new()
                .leaf("id")
                .leaf("name")
                .leaf("location")
                .leaf("file_type")
                .leaf("cv")
                .leaf("created_date"),
        )
        .many("candidate_review_status_items", review_status_items())
});

/// Reduced spec for the semi-limited tier: identity and status fields,
/// country and nationality by id+name only, brief user sub-projection.
static SEMI_LIMITED_CANDIDATE_SPEC: Lazy<ProjectionSpec> = Lazy::new(|| {
    ProjectionSpec::new()
        .leaf("id")
        .leaf("candidate_number")
        .leaf("status")
        .leaf("gender")
        .leaf("dob")
        .leaf("city")
        .leaf("year_of_arrival")
        .leaf("additional_info")
        .leaf("candidate_message")
        .leaf("folderlink")
        .leaf("sflink")
        .leaf("unhcr_status")
        .leaf("unhcr_number")
        .leaf("selected")
        .leaf("context_note")
        .leaf("created_date")
        .leaf("updated_date")
        .one("user", user_brief())
        .one("country", country_brief())
        .one("nationality", country_brief())
        .many("candidate_review_status_items", review_status_items())
});

/// Minimal spec for limited roles and unauthenticated callers
static LIMITED_CANDIDATE_SPEC: Lazy<ProjectionSpec> = Lazy::new(|| {
    ProjectionSpec::new()
        .leaf("id")
        .leaf("status")
        .leaf("candidate_number")
        .leaf("gender")
        .leaf("dob")
        .leaf("year_of_arrival")
        .leaf("additional_info")
        .leaf("candidate_message")
        .leaf("folderlink")
        .leaf("sflink")
        .leaf("selected")
        .leaf("created_date")
        .leaf("updated_date")
        .leaf("context_note")
        .one("user", user_brief())
        .many("candidate_review_status_items", review_status_items())
});

/// Choose the candidate spec for a caller's role. Unknown or absent roles
/// resolve to the most restrictive tier.
pub fn candidate_spec(role: Option<Role>) -> &'static ProjectionSpec {
    match role {
        Some(Role::Admin) | Some(Role::SourcePartnerAdmin) => &FULL_CANDIDATE_SPEC,
        Some(Role::SemiLimited) => &SEMI_LIMITED_CANDIDATE_SPEC,
        Some(Role::Limited) | Some(Role::User) | None => &LIMITED_CANDIDATE_SPEC,
    }
}

fn source_common() -> ProjectionSpec {
    ProjectionSpec::new()
        .leaf("id")
        .leaf("name")
        .leaf("status")
        .leaf("fixed")
        .leaf("global")
        .leaf("displayed_fields_long")
        .leaf("displayed_fields_short")
        .leaf("created_date")
        .leaf("updated_date")
}

static SAVED_LIST_SPEC: Lazy<ProjectionSpec> =
    Lazy::new(|| source_common().leaf("saved_search_id"));

static SAVED_SEARCH_SPEC: Lazy<ProjectionSpec> = Lazy::new(|| {
    source_common()
        .leaf("keyword")
        .many("search_joins", ProjectionSpec::new().leaf("child_search_id").leaf("join_type"))
});

/// Union of the list and search specs; project through
/// [`crate::projection::filters::ApplicableFieldsFilter`] so each subtype
/// only emits the fields it actually has.
static SOURCE_SPEC: Lazy<ProjectionSpec> = Lazy::new(|| {
    source_common()
        .leaf("saved_search_id")
        .leaf("keyword")
        .many("search_joins", ProjectionSpec::new().leaf("child_search_id").leaf("join_type"))
});

pub fn saved_list_spec() -> &'static ProjectionSpec {
    &SAVED_LIST_SPEC
}

pub fn saved_search_spec() -> &'static ProjectionSpec {
    &SAVED_SEARCH_SPEC
}

pub fn source_spec() -> &'static ProjectionSpec {
    &SOURCE_SPEC
}

/// Opportunity fields every caller may see
pub const OPPORTUNITY_PUBLIC_FIELDS: &[&str] =
    &["id", "name", "stage", "next_step", "next_step_due_date", "closing_comments"];

/// Opportunity fields additionally visible to source partner admins
pub const OPPORTUNITY_EXTRA_FIELDS: &[&str] =
    &["employer_feedback", "closing_comments_for_candidate"];

static OPPORTUNITY_SPEC: Lazy<ProjectionSpec> = Lazy::new(|| {
    ProjectionSpec::new()
        .leaf("id")
        .leaf("name")
        .leaf("stage")
        .leaf("next_step")
        .leaf("next_step_due_date")
        .leaf("closing_comments")
        .leaf("closing_comments_for_candidate")
        .leaf("employer_feedback")
        .leaf("created_date")
        .leaf("updated_date")
});

pub fn opportunity_spec() -> &'static ProjectionSpec {
    &OPPORTUNITY_SPEC
}

/// Role-gated filter for the flat opportunity projection
pub fn opportunity_filter(role: Option<Role>) -> RolePropertyFilter {
    RolePropertyFilter::new(role, OPPORTUNITY_PUBLIC_FIELDS, OPPORTUNITY_EXTRA_FIELDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_specs_are_monotonic() {
        let full = candidate_spec(Some(Role::Admin));
        let semi = candidate_spec(Some(Role::SemiLimited));
        let limited = candidate_spec(Some(Role::Limited));

        assert!(full.covers(semi));
        assert!(semi.covers(limited));
    }

    #[test]
    fn missing_role_gets_the_limited_spec() {
        let anonymous = candidate_spec(None);
        let limited = candidate_spec(Some(Role::Limited));
        assert_eq!(anonymous.field_names(), limited.field_names());
    }

    #[test]
    fn admin_tiers_share_the_full_spec() {
        assert_eq!(
            candidate_spec(Some(Role::Admin)).field_names(),
            candidate_spec(Some(Role::SourcePartnerAdmin)).field_names()
        );
    }
}
