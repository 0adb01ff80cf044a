//! tests/lead_store_tests.rs
//! Pruebas unitarias para `LeadStoreService` y sus repositorios.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use actix_rt::test;
    use chrono::DateTime;

    use crate::models::lead_model::LeadInput;
    use crate::services::lead_store_service::{
        FileLeadRepository, InMemoryLeadRepository, LeadRepository, LeadStoreService,
    };

    // Helper: servicio sobre el repositorio en memoria
    fn create_test_service() -> LeadStoreService {
        LeadStoreService::new(Arc::new(InMemoryLeadRepository::default()))
    }

    fn lead_input(name: &str, channels: &[&str]) -> LeadInput {
        LeadInput {
            name: name.to_string(),
            company: None,
            email: None,
            phone: None,
            niche: None,
            channels: channels.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    async fn test_create_defaults_channels() {
        let service = create_test_service();

        let added = service
            .create_leads(vec![lead_input("Ada Lovelace", &[])])
            .await
            .expect("create failed");

        assert_eq!(added.len(), 1);
        let lead = &added[0];
        assert_eq!(lead.channels, vec!["whatsapp", "email"]);
        assert_eq!(lead.tasks.len(), 2);
        for ch in &lead.channels {
            let task = lead.tasks.get(ch).expect("canal sin task");
            assert!(!task.done);
            assert!(task.timestamp.is_none());
        }
        assert_eq!(lead.created_at, lead.updated_at);
        assert!(DateTime::parse_from_rfc3339(&lead.created_at).is_ok());
    }

    #[test]
    async fn test_create_many_increases_count() {
        let service = create_test_service();

        let added = service
            .create_leads(vec![
                lead_input("A", &["email"]),
                lead_input("B", &["phone"]),
                lead_input("C", &[]),
            ])
            .await
            .expect("create failed");
        assert_eq!(added.len(), 3);

        let all = service.list_leads().await.expect("list failed");
        assert_eq!(all.len(), 3);
        // Orden de inserción
        let names: Vec<&str> = all.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        // tasks y channels siempre en sincronía al crear
        for lead in &all {
            let mut task_keys: Vec<&String> = lead.tasks.keys().collect();
            let mut channels: Vec<&String> = lead.channels.iter().collect();
            task_keys.sort();
            channels.sort();
            assert_eq!(task_keys, channels, "lead {}", lead.name);
        }
    }

    #[test]
    async fn test_create_dedups_channels() {
        let service = create_test_service();

        let added = service
            .create_leads(vec![lead_input(
                "Dup",
                &["phone", "other:LinkedIn", "phone", " "],
            )])
            .await
            .expect("create failed");

        assert_eq!(added[0].channels, vec!["phone", "other:LinkedIn"]);
        assert_eq!(added[0].tasks.len(), 2);
    }

    #[test]
    async fn test_update_task_done_sets_timestamp() {
        let service = create_test_service();
        let added = service
            .create_leads(vec![lead_input("Ada", &[])])
            .await
            .unwrap();
        let id = added[0].id.clone();

        let updated = service
            .update_task(&id, "email", true)
            .await
            .expect("update failed")
            .expect("lead no encontrado");

        let task = updated.tasks.get("email").unwrap();
        assert!(task.done);
        let ts = task.timestamp.as_ref().expect("sin timestamp");
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
        assert!(updated.updated_at >= updated.created_at);
        assert_ne!(updated.updated_at, added[0].updated_at);
    }

    #[test]
    async fn test_update_task_idempotent() {
        let service = create_test_service();
        let added = service
            .create_leads(vec![lead_input("Ada", &[])])
            .await
            .unwrap();
        let id = added[0].id.clone();

        service.update_task(&id, "email", true).await.unwrap();
        let updated = service
            .update_task(&id, "email", true)
            .await
            .unwrap()
            .unwrap();

        let task = updated.tasks.get("email").unwrap();
        assert!(task.done);
        assert!(task.timestamp.is_some());
    }

    #[test]
    async fn test_toggle_clears_timestamp() {
        let service = create_test_service();
        let added = service
            .create_leads(vec![lead_input("Ada", &[])])
            .await
            .unwrap();
        let id = added[0].id.clone();

        service.update_task(&id, "whatsapp", true).await.unwrap();
        let updated = service
            .update_task(&id, "whatsapp", false)
            .await
            .unwrap()
            .unwrap();

        let task = updated.tasks.get("whatsapp").unwrap();
        assert!(!task.done);
        assert!(task.timestamp.is_none(), "timestamp debe limpiarse");
    }

    #[test]
    async fn test_update_new_label_backfills_channel_once() {
        let service = create_test_service();
        let added = service
            .create_leads(vec![lead_input("Ada", &[])])
            .await
            .unwrap();
        let id = added[0].id.clone();

        service.update_task(&id, "linkedin", true).await.unwrap();
        let updated = service
            .update_task(&id, "linkedin", false)
            .await
            .unwrap()
            .unwrap();

        let occurrences = updated.channels.iter().filter(|c| *c == "linkedin").count();
        assert_eq!(occurrences, 1, "canal duplicado tras updates repetidos");
        assert!(updated.tasks.contains_key("linkedin"));
    }

    #[test]
    async fn test_update_unknown_id_leaves_store_intact() {
        let service = create_test_service();
        service
            .create_leads(vec![lead_input("Ada", &[])])
            .await
            .unwrap();
        let before = service.list_leads().await.unwrap();

        let result = service.update_task("no-such-id", "email", true).await;
        assert!(matches!(result, Ok(None)));

        let after = service.list_leads().await.unwrap();
        assert_eq!(before.len(), after.len());
        assert_eq!(before[0].updated_at, after[0].updated_at);
    }

    #[test]
    async fn test_clear_empties_store() {
        let service = create_test_service();
        service
            .create_leads(vec![lead_input("A", &[]), lead_input("B", &[])])
            .await
            .unwrap();

        service.clear().await.expect("clear failed");
        assert!(service.list_leads().await.unwrap().is_empty());
    }

    #[test]
    async fn test_file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("inbuilt_leads.json");

        let service = LeadStoreService::new(Arc::new(FileLeadRepository::new(path.clone())));
        let mut input = lead_input("Grace Hopper", &["email", "other:LinkedIn"]);
        input.company = Some("Navy".to_string());
        let added = service.create_leads(vec![input]).await.unwrap();
        service.update_task(&added[0].id, "email", true).await.unwrap();

        // Nuevo servicio sobre el mismo archivo: debe leer lo mismo
        let reopened = LeadStoreService::new(Arc::new(FileLeadRepository::new(path)));
        let leads = reopened.list_leads().await.unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].id, added[0].id);
        assert_eq!(leads[0].company.as_deref(), Some("Navy"));
        assert_eq!(leads[0].channels, vec!["email", "other:LinkedIn"]);
        assert!(leads[0].tasks.get("email").unwrap().done);
        assert!(leads[0].tasks.get("email").unwrap().timestamp.is_some());
    }

    #[test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLeadRepository::new(dir.path().join("nope.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    async fn test_corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inbuilt_leads.json");
        fs::write(&path, b"esto no es json {{{").unwrap();

        let repo = FileLeadRepository::new(path);
        assert!(repo.load().unwrap().is_empty(), "corrupto debe leerse vacío");
    }

    #[test]
    async fn test_write_failure_surfaces_error() {
        let dir = tempfile::tempdir().unwrap();
        // El "directorio" padre es un archivo normal: la escritura debe fallar
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let service = LeadStoreService::new(Arc::new(FileLeadRepository::new(
            blocker.join("store.json"),
        )));
        let result = service.create_leads(vec![lead_input("Ada", &[])]).await;
        assert!(result.is_err(), "la escritura fallida debe propagarse");
    }
}
