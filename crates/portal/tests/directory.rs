mod common;

use chrono::NaiveDate;
use common::Harness;
use portal::store::Severity;
use shared::{
    domain::requests::{CreateUserRequest, FindAllTransactions, UpdateProfileRequest},
    errors::ClientError,
    model::{Gender, Role, RoleFilter, RoleUpdate},
};
use std::sync::atomic::Ordering;

async fn signed_in() -> Harness {
    let h = Harness::start().await;
    let (access, refresh) = h.backend.issue_session();
    h.seed_tokens(&access, &refresh).await;
    h.state.session.load_user().await.unwrap();
    h
}

fn new_student(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        first_name: "Dee".into(),
        middle_name: None,
        last_name: "Hall".into(),
        email: email.into(),
        password: "pw".into(),
        confirm_password: "pw".into(),
        role: Role::Student,
        cell_phone: "5550000".into(),
        apartment: None,
        city: Some("Springfield".into()),
        state: None,
        address: None,
        gender: Some(Gender::Other),
        dob: NaiveDate::from_ymd_opt(2005, 9, 1),
        school: vec!["apollo-high-school".into()],
    }
}

#[tokio::test]
async fn list_is_filtered_by_role_with_limit() {
    let h = signed_in().await;

    let list = h
        .state
        .directory
        .fetch_users(RoleFilter::Instructor)
        .await
        .unwrap();

    assert_eq!(list.total_count, 1);
    assert_eq!(list.users[0].full_name(), "Cy Diaz");

    let call = h.backend.seen_path("/user/get").pop().unwrap();
    assert_eq!(call.query.as_deref(), Some("role=INSTRUCTOR&limit=100"));

    let state = h.state.directory.snapshot();
    assert!(state.user_list.success);
    assert!(!state.user_list.loading);
    assert_eq!(state.user_list_filter, Some(RoleFilter::Instructor));
}

#[tokio::test]
async fn promoted_student_leaves_the_list() {
    let h = signed_in().await;
    h.state
        .directory
        .fetch_users(RoleFilter::Student)
        .await
        .unwrap();

    h.state
        .directory
        .update_user_role(1, RoleUpdate::Instructor)
        .await
        .unwrap();

    let call = h.backend.seen_path("/user/update/role/1").pop().unwrap();
    assert_eq!(call.method, "PATCH");
    assert_eq!(call.query.as_deref(), Some("role=INSTRUCTOR"));

    let state = h.state.directory.snapshot();
    let cached = state.user_list.data.unwrap();
    assert!(cached.users.iter().all(|u| u.id != 1));
    assert!(state.user_list.stale);
    assert_eq!(h.state.alerts.current().message, "User role updated successfully");

    let fresh = h.state.directory.refresh_users().await.unwrap();
    assert_eq!(fresh.users.len(), 1);
    assert!(!h.state.directory.snapshot().user_list.stale);
}

#[tokio::test]
async fn failed_role_change_leaves_cache_alone() {
    let h = signed_in().await;
    let before = h
        .state
        .directory
        .fetch_users(RoleFilter::Student)
        .await
        .unwrap();
    h.backend.fail_role_update.store(true, Ordering::SeqCst);

    let err = h
        .state
        .directory
        .update_user_role(2, RoleUpdate::Csr)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Server { status: 500, ref message } if message == "Role update failed"));

    let state = h.state.directory.snapshot();
    assert_eq!(state.user_list.data, Some(before));
    assert_eq!(state.user_update.error.as_deref(), Some("Role update failed"));
    let alert = h.state.alerts.current();
    assert_eq!(alert.severity, Severity::Error);
    assert_eq!(alert.message, "Failed to update user role");
    assert!(h.state.session.snapshot().is_authenticated);
}

#[tokio::test]
async fn create_and_delete_users() {
    let h = signed_in().await;
    h.state.directory.fetch_users(RoleFilter::All).await.unwrap();

    h.state
        .directory
        .create_user(&new_student("dee@school.test"))
        .await
        .unwrap();
    assert_eq!(h.state.alerts.current().message, "User created successfully");
    assert!(h.state.directory.snapshot().user_list.stale);

    let err = h
        .state
        .directory
        .create_user(&new_student("dee@school.test"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Conflict(ref m) if m == "Email already registered"));
    assert_eq!(h.state.alerts.current().message, "Failed to create user");

    let created = h.state.directory.refresh_users().await.unwrap();
    assert_eq!(created.users.len(), 4);

    h.state.directory.delete_user(4).await.unwrap();
    let state = h.state.directory.snapshot();
    assert!(state.user_delete.success);
    assert_eq!(state.user_list.data.unwrap().users.len(), 3);
}

#[tokio::test]
async fn invalid_new_user_is_not_sent() {
    let h = signed_in().await;
    let mut form = new_student("broken");
    form.confirm_password = "different".into();

    let err = h.state.directory.create_user(&form).await.unwrap_err();

    match err {
        ClientError::Validation(messages) => assert_eq!(
            messages,
            vec![
                "confirm_password: Passwords must match".to_string(),
                "email: Must be a valid email".to_string(),
            ]
        ),
        other => panic!("unexpected {other:?}"),
    }
    assert!(h.backend.seen_path("/user/post").is_empty());
}

#[tokio::test]
async fn new_user_without_birth_date_is_not_sent() {
    let h = signed_in().await;
    let form = CreateUserRequest {
        dob: None,
        ..new_student("dee@school.test")
    };

    let err = h.state.directory.create_user(&form).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Validation(ref messages)
            if messages == &vec!["dob: Date of Birth is required".to_string()]
    ));
    assert!(h.backend.seen_path("/user/post").is_empty());
}

#[tokio::test]
async fn profile_round_trip() {
    let h = signed_in().await;

    let profile = h.state.directory.fetch_user_details().await.unwrap();
    assert_eq!(profile.profile.gender, Some(Gender::Female));

    let changes = UpdateProfileRequest {
        city: Some("Shelbyville".into()),
        zip_code: Some(19001),
        ..Default::default()
    };
    h.state.directory.update_user_details(&changes).await.unwrap();

    assert_eq!(
        *h.backend.last_form.lock().unwrap(),
        vec![
            ("city".to_string(), "Shelbyville".to_string()),
            ("zip_code".to_string(), "19001".to_string()),
        ]
    );
    assert_eq!(
        h.state.alerts.current().message,
        "User profile updated succesfully"
    );
    assert!(h.state.directory.snapshot().user_details.stale);
}

#[tokio::test]
async fn user_by_id_and_missing_user() {
    let h = signed_in().await;

    let user = h.state.directory.fetch_user_details_by_id(3).await.unwrap();
    assert_eq!(user.role, Role::Instructor);

    let err = h.state.directory.fetch_user(42).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref m) if m == "User not found"));
    assert_eq!(
        h.state.directory.snapshot().user.error.as_deref(),
        Some("User not found")
    );
    assert!(h.state.session.snapshot().is_authenticated);
}

#[tokio::test]
async fn accounting_and_schools() {
    let h = signed_in().await;

    let transactions = h
        .state
        .accounts
        .fetch_transactions(&FindAllTransactions::for_user(1))
        .await
        .unwrap();
    assert_eq!(transactions.total, 2);
    assert_eq!(transactions.net_total(), 225.0);

    let call = h.backend.seen_path("/account/get").pop().unwrap();
    assert_eq!(
        call.query.as_deref(),
        Some("offset=0&limit=10&order=DESC&user_id=1")
    );

    let schools = h.state.schools.fetch_schools().await.unwrap();
    assert_eq!(schools.school[0].name, "Apollo High School");
    assert!(h.state.schools.snapshot().success);
}
