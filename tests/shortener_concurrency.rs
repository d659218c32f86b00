use std::collections::HashSet;
use std::sync::Arc;
use tiny_url::application::services::{ShortenerService, ShortenerSettings};
use tiny_url::domain::entities::NewUrlMapping;
use tiny_url::domain::repositories::MappingStore;
use tiny_url::infrastructure::persistence::MemoryMappingStore;

fn service() -> (Arc<MemoryMappingStore>, Arc<ShortenerService<MemoryMappingStore>>) {
    let store = Arc::new(MemoryMappingStore::new());
    let service = Arc::new(ShortenerService::new(
        store.clone(),
        ShortenerSettings::new("http://localhost:3000"),
    ));
    (store, service)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_same_url_yields_one_mapping() {
    let (store, service) = service();

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.shorten("https://example.com/race").await })
        })
        .collect();

    let mut codes = HashSet::new();
    let mut created = 0;
    for handle in handles {
        let shortened = handle.await.unwrap().unwrap();
        if shortened.created {
            created += 1;
        }
        codes.insert(shortened.short_code);
    }

    assert_eq!(codes.len(), 1);
    assert_eq!(created, 1);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_redirects_count_every_visit() {
    let (store, service) = service();
    store
        .create(NewUrlMapping::new("https://example.com", "busy001"))
        .await
        .unwrap();

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.redirect("busy001").await })
        })
        .collect();

    for handle in handles {
        let resolved = handle.await.unwrap().unwrap();
        assert!(resolved.click_recorded);
    }

    let mapping = service.stats("busy001").await.unwrap();
    assert_eq!(mapping.clicks, 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_urls_get_distinct_codes() {
    let (store, service) = service();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .shorten(&format!("https://example.com/page/{}", i))
                    .await
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap().unwrap().short_code);
    }

    assert_eq!(codes.len(), 50);
    assert_eq!(store.count().await.unwrap(), 50);
}
