use crate::AlertHeaders;

use googletest::prelude::*;

fn header<'a>(headers: &'a http::HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[test]
fn given_created_entity_when_building_alert_then_names_app_entity_and_id() {
    let alerts = AlertHeaders::new("sprintApp");

    let headers = alerts.entity_created("sprint", 42);

    assert_that!(header(&headers, "X-sprintApp-alert"), some(eq("sprintApp.sprint.created")));
    assert_that!(header(&headers, "X-sprintApp-params"), some(eq("42")));
}

#[test]
fn given_updated_and_deleted_entities_when_building_alerts_then_use_matching_verbs() {
    let alerts = AlertHeaders::new("sprintApp");

    let updated = alerts.entity_updated("sprint", 7);
    let deleted = alerts.entity_deleted("sprint", 7);

    assert_that!(header(&updated, "X-sprintApp-alert"), some(eq("sprintApp.sprint.updated")));
    assert_that!(header(&deleted, "X-sprintApp-alert"), some(eq("sprintApp.sprint.deleted")));
    assert_that!(header(&deleted, "X-sprintApp-params"), some(eq("7")));
}

#[test]
fn given_failure_when_building_alert_then_sets_error_key_and_entity() {
    let alerts = AlertHeaders::new("sprintApp");

    let headers = alerts.failure("sprint", "idnull");

    assert_that!(header(&headers, "X-sprintApp-error"), some(eq("error.idnull")));
    assert_that!(header(&headers, "X-sprintApp-params"), some(eq("sprint")));
    assert_that!(header(&headers, "X-sprintApp-alert"), none());
}

#[test]
fn given_application_name_unfit_for_header_when_building_alert_then_headers_are_skipped() {
    let alerts = AlertHeaders::new("sprint app");

    let headers = alerts.entity_created("sprint", 1);

    assert_that!(headers.len(), eq(0));
}
