use crate::modules::appointments::adapters::outbound::appointment_store_in_memory::InMemoryAppointmentStore;
use crate::modules::appointments::core::projections::AppointmentView;
use crate::modules::appointments::use_cases::create_appointment::decision::DecideError;
use crate::modules::appointments::use_cases::create_appointment::handler::CreateAppointmentHandler;
use crate::modules::appointments::use_cases::list_appointments_by_user::queries_port::AppointmentQueries;
use crate::shared::core::datetime_parser::LenientDateTimeParser;
use crate::tests::fixtures::commands::create_appointment::CreateAppointmentBuilder;
use std::sync::Arc;

#[tokio::test]
async fn books_and_lists_appointments_by_user() {
    let store = Arc::new(InMemoryAppointmentStore::new());
    let handler = CreateAppointmentHandler::new(store.clone(), LenientDateTimeParser::new());

    let requests = [
        (1, "2021-04-22 23:30:00", true),
        (1, "2021-04-23 00:00:00", false),
        (1, "2021-04-24 08:15:00", false),
        (2, "2021-04-23 10:00:00", true),
        (1, "2021-04-21 09:00:00", true),
        (1, "2021-04-21 17:00:00", false),
    ];

    for (user_id, appointment, expected_ok) in requests {
        let command = CreateAppointmentBuilder::new()
            .user_id(user_id)
            .appointment(appointment)
            .build();
        let result = handler.handle(command).await;
        assert_eq!(result.is_ok(), expected_ok, "{user_id} at {appointment}");
    }

    let first = store.list_by_user_id(1).await;
    let views: Vec<AppointmentView> = first.iter().map(AppointmentView::from).collect();
    assert_eq!(
        views,
        vec![
            AppointmentView {
                start_time: "2021-04-22 23:30".into(),
                end_time: "2021-04-23 00:00".into(),
            },
            AppointmentView {
                start_time: "2021-04-21 09:00".into(),
                end_time: "2021-04-21 09:30".into(),
            },
        ]
    );
    assert_eq!(store.list_by_user_id(1).await, first, "listing is idempotent");
    assert_eq!(store.list_by_user_id(2).await.len(), 1);
}

#[tokio::test]
async fn rejects_without_touching_the_store() {
    let store = Arc::new(InMemoryAppointmentStore::new());
    let handler = CreateAppointmentHandler::new(store.clone(), LenientDateTimeParser::new());

    for (appointment, reason) in [
        ("BAD_INPUT", DecideError::InvalidDateTime),
        ("2021-04-22 11:03:00", DecideError::MisalignedTime),
    ] {
        let command = CreateAppointmentBuilder::new().appointment(appointment).build();
        assert_eq!(handler.handle(command).await, Err(reason));
    }

    assert!(store.list_by_user_id(1).await.is_empty());
}
