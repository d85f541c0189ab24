use super::*;

#[test]
fn user_parses_service_field_names() {
    let json = r#"{
        "UID": {"RandID": "abc123"},
        "UName": {"name": "alice"},
        "Name": "Alice",
        "BirthDate": "2000-01-01T00:00:00Z"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id.value, "abc123");
    assert_eq!(user.username.value, "alice");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.birth_date.as_deref(), Some("2000-01-01T00:00:00Z"));
}

#[test]
fn user_optional_fields_default() {
    let json = r#"{"UID": {"RandID": "x"}, "UName": {"name": "bob"}}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.name, "");
    assert_eq!(user.birth_date, None);
}

#[test]
fn profile_parses_posts_as_ids() {
    let json = r#"{
        "User": {"UID": {"RandID": "u1"}, "UName": {"name": "alice"}},
        "Posts": [{"RandID": "p1"}, {"RandID": "p2"}]
    }"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.user.username.value, "alice");
    let posts: Vec<&str> = profile.posts.iter().map(|p| p.value.as_str()).collect();
    assert_eq!(posts, ["p1", "p2"]);
}

#[test]
fn error_body_accepts_numeric_or_string_code() {
    let numeric: ErrorBody =
        serde_json::from_str(r#"{"ErrorCode": 400, "Description": "Bad Request: nope"}"#).unwrap();
    let text: ErrorBody =
        serde_json::from_str(r#"{"ErrorCode": "404", "Description": "missing"}"#).unwrap();
    assert_eq!(numeric.description, "Bad Request: nope");
    assert_eq!(text.code, serde_json::json!("404"));
}

#[test]
fn login_response_user_shape_yields_uid() {
    let json = r#"{"UID": {"RandID": "tok-1"}, "UName": {"name": "alice"}}"#;
    let response: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.token(), "tok-1");
}

#[test]
fn login_response_bare_id_shape() {
    let response: LoginResponse = serde_json::from_str(r#"{"RandID": "tok-2"}"#).unwrap();
    assert_eq!(response.token(), "tok-2");
}

#[test]
fn profile_null_posts_means_no_posts() {
    let json = r#"{
        "User": {"UID": {"RandID": "u1"}, "UName": {"name": "alice"}},
        "Posts": null
    }"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert!(profile.posts.is_empty());
}

#[test]
fn profile_missing_posts_means_no_posts() {
    let json = r#"{"User": {"UID": {"RandID": "u1"}, "UName": {"name": "alice"}}}"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert!(profile.posts.is_empty());
}

// =============================================================
// UserList
// =============================================================

#[test]
fn user_list_accepts_usernames_and_users() {
    let json = r#"{"Users": [
        {"name": "alice.smith"},
        {"UID": {"RandID": "u2"}, "UName": {"name": "bobby.tables"}, "Name": "Bob"}
    ]}"#;
    let list: UserList = serde_json::from_str(json).unwrap();
    let names: Vec<&str> = list.users.iter().map(UserListEntry::username).collect();
    assert_eq!(names, ["alice.smith", "bobby.tables"]);
}

#[test]
fn user_list_null_users_is_empty() {
    let list: UserList = serde_json::from_str(r#"{"Users": null}"#).unwrap();
    assert!(list.users.is_empty());
}
