//! A day in the life of the core: staff check in and out, apply for leave,
//! an admin settles it, and the dashboards are computed off the results.

use chrono::{NaiveDate, NaiveTime, Utc};
use worknest_core::model::attendance::AttendanceStatus;
use worknest_core::model::leave::{LeaveDecision, LeaveStatus, LeaveType};
use worknest_core::model::role::Role;
use worknest_core::model::user::{User, roster_size};
use worknest_core::{AttendanceEngine, LeaveEngine, PolicyConfig, Viewer};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn staff_user(id: u64, name: &str, is_active: bool) -> User {
    User {
        id,
        name: name.into(),
        email: format!("{}@worknest.test", name.to_lowercase()),
        role: Role::Staff,
        is_active,
        phone: None,
        department: Some("Engineering".into()),
        position: None,
        hire_date: None,
    }
}

#[test]
fn attendance_day_end_to_end() {
    init_tracing();

    let config = PolicyConfig::default();
    let engine = AttendanceEngine::new(&config);
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let roster = vec![
        staff_user(1, "Amina", true),
        staff_user(2, "Bilal", true),
        staff_user(3, "Chen", true),
        staff_user(4, "Dora", false), // deactivated, off the roster
    ];
    assert_eq!(roster_size(&roster), 3);

    // Amina is on time, Bilal is late, Chen never shows up.
    let amina = engine
        .check_in(1, today, NaiveTime::from_hms_opt(8, 58, 0).unwrap(), None, None)
        .unwrap();
    let bilal = engine
        .check_in(2, today, NaiveTime::from_hms_opt(9, 15, 0).unwrap(), None, None)
        .unwrap();
    assert_eq!(amina.status, AttendanceStatus::Present);
    assert_eq!(bilal.status, AttendanceStatus::Late);

    let bilal = engine
        .check_out(
            Some(&bilal),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            None,
        )
        .unwrap();
    assert_eq!(bilal.total_hours, Some(8.25));

    let rows = vec![amina, bilal];
    let stats = engine.daily_stats(roster_size(&roster), &rows);
    assert_eq!(stats.total_staff, 3);
    assert_eq!(stats.present, 1);
    assert_eq!(stats.late, 1);
    assert_eq!(stats.absent, 1); // Chen, implicitly
}

#[test]
fn leave_request_lifecycle_end_to_end() {
    init_tracing();

    let config = PolicyConfig::default();
    let engine = LeaveEngine::new(&config);
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let mut request = engine
        .validate_new_request(
            1,
            LeaveType::Annual,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            "family visit".into(),
            &[],
            today,
        )
        .unwrap();
    assert_eq!(request.total_days, 3);
    assert_eq!(request.status, LeaveStatus::Pending);

    // a colleague cannot cancel it, the owner could
    assert!(engine.cancel(&request, 2, Role::Staff).is_err());
    assert!(engine.cancel(&request, 1, Role::Staff).is_ok());

    engine
        .decide(&mut request, LeaveDecision::Approve, 42, None, Utc::now())
        .unwrap();
    assert_eq!(request.status, LeaveStatus::Approved);

    // once settled only an admin could still cancel, and the balance reflects it
    assert!(engine.cancel(&request, 1, Role::Staff).is_err());
    let balance = engine.balance(std::slice::from_ref(&request), 2024);
    assert_eq!(balance.used, 3);
    assert_eq!(balance.remaining, 17);
}

#[test]
fn visibility_is_role_scoped() {
    init_tracing();

    use worknest_core::model::notice::{Audience, Notice, NoticeType};
    use worknest_core::visibility::visible_notices;

    let draft = Notice {
        id: Some(1),
        title: "Draft policy".into(),
        content: "...".into(),
        notice_type: NoticeType::General,
        published_by: 42,
        is_published: false,
        publish_date: None,
        expiry_date: None,
        target_audience: Audience::All,
        priority: 2,
    };
    let mut published = draft.clone();
    published.is_published = true;

    let notices = vec![draft, published];
    let staff = Viewer::new(1, Role::Staff);
    let admin = Viewer::new(42, Role::Admin);

    assert_eq!(visible_notices(&staff, &notices).len(), 1);
    assert_eq!(visible_notices(&admin, &notices).len(), 2);
}
