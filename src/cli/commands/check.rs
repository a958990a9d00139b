//! Check command handler

use crate::clients::bangumi::MetadataFetcher;
use crate::config::Config;
use crate::db::{CatalogStore, Store};
use crate::domain::SubjectId;
use crate::state::SharedState;

pub async fn cmd_check(config: &Config, subject_id: &str) -> anyhow::Result<()> {
    let id: SubjectId = subject_id.parse()?;

    println!("Database: {}", redact_credentials(&config.database.url));
    let store = Store::from_config(&config.database).await?;
    store.ping().await?;
    println!("  ✓ reachable");

    match store.get_subject(id).await? {
        Some(subject) => {
            let title = subject.name_jp.or(subject.name_cn).unwrap_or_default();
            let sources = store.list_sources(id).await?;
            println!("  ✓ subject {id} \"{title}\" with {} source(s)", sources.len());
        }
        None => println!("  ○ subject {id} is not in the catalog"),
    }

    println!("Bangumi: {}", config.bangumi.base_url);
    let bangumi = SharedState::bangumi_client(config)?;
    let metadata = bangumi.fetch_subject(id).await?;
    println!("  ✓ subject {id} has {} episode(s)", metadata.eps.len());

    store.close().await?;
    Ok(())
}

/// Hides the password part of a connection URL.
fn redact_credentials(db_url: &str) -> String {
    match url::Url::parse(db_url) {
        Ok(mut parsed) if parsed.password().is_some() => {
            let _ = parsed.set_password(Some("****"));
            parsed.to_string()
        }
        _ => db_url.to_string(),
    }
}
