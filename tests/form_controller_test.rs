use plant_catalog::clients::{CollectionClient, FormClient};
use plant_catalog::collection::CollectionStatus;
use plant_catalog::form::{FormError, SUBMIT_FAILED_MESSAGE};
use plant_catalog::model::{DraftError, DraftField, NewPlant, PlantDraft, PlantRecord};
use plant_catalog::service::mock::{MockPlantService, RecordedCall};
use plant_catalog::service::ServiceError;
use std::time::Duration;
use tokio::sync::oneshot;

/// Real form and collection controllers against one scripted service.
///
/// The collection is loaded (empty) before returning.
async fn start(mock: &mut MockPlantService) -> (FormClient, CollectionClient) {
    mock.expect_list().return_ok(Vec::new());

    let (collection_actor, collection) = plant_catalog::collection::new();
    let (form_actor, form) = plant_catalog::form::new();
    tokio::spawn(collection_actor.run(mock.service()));
    tokio::spawn(form_actor.run((mock.service(), collection.clone())));

    collection.settled().await.unwrap();
    (form, collection)
}

async fn fill(form: &FormClient, name: &str, image: &str, price: &str) {
    form.update_field(DraftField::Name, name).await.unwrap();
    form.update_field(DraftField::Image, image).await.unwrap();
    form.update_field(DraftField::Price, price).await.unwrap();
}

fn draft(name: &str, image: &str, price: &str) -> PlantDraft {
    PlantDraft {
        name: name.to_string(),
        image: image.to_string(),
        price: price.to_string(),
    }
}

#[tokio::test]
async fn test_blank_name_is_rejected_without_request() {
    let mut mock = MockPlantService::new();
    let (form, _collection) = start(&mut mock).await;

    for name in ["", "   "] {
        fill(&form, name, "u", "9.99").await;
        let result = form.submit().await;
        assert_eq!(result, Err(FormError::Validation(DraftError::MissingName)));

        let snapshot = form.snapshot().await.unwrap();
        assert_eq!(snapshot.error.as_deref(), Some("Plant name is required"));
        assert!(!snapshot.submitting);
    }

    assert_eq!(mock.calls(), vec![RecordedCall::List]);
}

#[tokio::test]
async fn test_invalid_price_is_rejected() {
    let mut mock = MockPlantService::new();
    let (form, _collection) = start(&mut mock).await;

    for price in ["", "0", "-1", "abc", "inf", "NaN"] {
        fill(&form, "Fern", "u", price).await;
        assert!(!form.validate().await.unwrap());
        assert_eq!(
            form.submit().await,
            Err(FormError::Validation(DraftError::InvalidPrice)),
            "price {:?} should be rejected",
            price
        );
    }

    assert_eq!(
        form.snapshot().await.unwrap().error.as_deref(),
        Some("Please enter a valid price")
    );
    assert_eq!(mock.calls(), vec![RecordedCall::List]);
}

#[tokio::test]
async fn test_validation_reports_first_problem() {
    let mut mock = MockPlantService::new();
    let (form, _collection) = start(&mut mock).await;

    fill(&form, "Fern", " ", "0").await;
    assert!(!form.validate().await.unwrap());
    assert_eq!(
        form.snapshot().await.unwrap().error.as_deref(),
        Some("Image URL is required")
    );

    fill(&form, "Fern", "u", "9.99").await;
    assert!(form.validate().await.unwrap());
}

#[tokio::test]
async fn test_successful_submit_adds_record_and_resets_draft() {
    let mut mock = MockPlantService::new();
    let (form, collection) = start(&mut mock).await;

    let created = PlantRecord::new(1u64, "Fern", "u", 9.99);
    mock.expect_create().return_ok(created.clone());

    fill(&form, "Fern", "u", "9.99").await;
    let record = form.submit().await.unwrap();
    assert_eq!(record, created);

    let snapshot = form.snapshot().await.unwrap();
    assert_eq!(snapshot.draft, PlantDraft::default());
    assert_eq!(snapshot.error, None);
    assert!(!snapshot.submitting);

    let plants = collection.snapshot().await.unwrap().plants;
    assert_eq!(plants, vec![created]);

    assert_eq!(
        mock.calls(),
        vec![
            RecordedCall::List,
            RecordedCall::Create(NewPlant::new("Fern", "u", 9.99)),
        ]
    );
    mock.verify();
}

#[tokio::test]
async fn test_failed_submit_keeps_draft() {
    let mut mock = MockPlantService::new();
    let (form, collection) = start(&mut mock).await;

    mock.expect_create()
        .return_err(ServiceError::status(500, "/plants"));

    fill(&form, "Fern", "u", "9.99").await;
    let result = form.submit().await;
    assert_eq!(
        result,
        Err(FormError::Service(ServiceError::status(500, "/plants")))
    );

    let snapshot = form.snapshot().await.unwrap();
    assert!(!snapshot.submitting);
    assert_eq!(snapshot.error.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
    assert_eq!(snapshot.draft, draft("Fern", "u", "9.99"));

    assert!(collection.snapshot().await.unwrap().plants.is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_form_is_locked_while_submitting() {
    let mut mock = MockPlantService::new();
    let (form, _collection) = start(&mut mock).await;

    let (release, gate) = oneshot::channel();
    mock.expect_create()
        .held_until(gate)
        .return_ok(PlantRecord::new(1u64, "Fern", "u", 9.99));

    fill(&form, "Fern", "u", "9.99").await;
    let first = tokio::spawn({
        let form = form.clone();
        async move { form.submit().await }
    });

    let mut submitting = false;
    for _ in 0..200 {
        if form.snapshot().await.unwrap().submitting {
            submitting = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(submitting, "form never entered the submitting state");

    assert_eq!(form.submit().await, Err(FormError::Busy));
    assert_eq!(
        form.update_field(DraftField::Name, "Other").await,
        Err(FormError::Busy)
    );

    release.send(()).unwrap();
    assert!(first.await.unwrap().is_ok());
    assert!(!form.snapshot().await.unwrap().submitting);

    // Exactly one create went out
    let creates = mock
        .calls()
        .into_iter()
        .filter(|call| matches!(call, RecordedCall::Create(_)))
        .count();
    assert_eq!(creates, 1);
    mock.verify();
}

#[tokio::test]
async fn test_aborted_submit_releases_form() {
    let mut mock = MockPlantService::new();
    let (form, collection) = start(&mut mock).await;
    // No create expectation: the mock panics inside the request task.

    fill(&form, "Fern", "u", "9.99").await;
    let result = form.submit().await;
    assert!(matches!(
        result,
        Err(FormError::Service(ServiceError::Aborted(_)))
    ));

    let snapshot = form.snapshot().await.unwrap();
    assert!(!snapshot.submitting);
    assert_eq!(snapshot.error.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
    assert_eq!(snapshot.draft, draft("Fern", "u", "9.99"));
    assert!(collection.snapshot().await.unwrap().plants.is_empty());
}

#[tokio::test]
async fn test_submit_waits_for_loaded_collection() {
    let mut mock = MockPlantService::new();
    let (release, gate) = oneshot::channel();
    mock.expect_list().held_until(gate).return_ok(Vec::new());

    let (collection_actor, collection) = plant_catalog::collection::new();
    let (form_actor, form) = plant_catalog::form::new();
    tokio::spawn(collection_actor.run(mock.service()));
    tokio::spawn(form_actor.run((mock.service(), collection.clone())));

    fill(&form, "Fern", "u", "9.99").await;
    assert_eq!(
        form.submit().await,
        Err(FormError::CollectionNotReady(CollectionStatus::Loading))
    );

    // Nothing was created and the draft is intact
    assert_eq!(mock.calls(), vec![RecordedCall::List]);
    let snapshot = form.snapshot().await.unwrap();
    assert!(!snapshot.submitting);
    assert_eq!(snapshot.draft, draft("Fern", "u", "9.99"));

    release.send(()).unwrap();
    collection.settled().await.unwrap();

    let created = PlantRecord::new(1u64, "Fern", "u", 9.99);
    mock.expect_create().return_ok(created.clone());
    assert_eq!(form.submit().await, Ok(created.clone()));
    assert_eq!(collection.snapshot().await.unwrap().plants, vec![created]);
    mock.verify();
}

#[tokio::test]
async fn test_submit_refused_after_failed_load() {
    let mut mock = MockPlantService::new();
    mock.expect_list()
        .return_err(ServiceError::status(500, "/plants"));

    let (collection_actor, collection) = plant_catalog::collection::new();
    let (form_actor, form) = plant_catalog::form::new();
    tokio::spawn(collection_actor.run(mock.service()));
    tokio::spawn(form_actor.run((mock.service(), collection.clone())));
    collection.settled().await.unwrap();

    fill(&form, "Fern", "u", "9.99").await;
    assert_eq!(
        form.submit().await,
        Err(FormError::CollectionNotReady(CollectionStatus::LoadError))
    );
    assert_eq!(mock.calls(), vec![RecordedCall::List]);
}
