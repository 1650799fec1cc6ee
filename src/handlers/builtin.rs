//! Handlers for the built-in message types.

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use serde_json::Value;

use super::messages::{
    CREATE_CUSTOM_SPACING, CREATE_CUSTOM_TYPOGRAPHY, CREATE_TEXT_STYLE, CREATE_TYPOGRAPHY_PRESET,
    CreateTextStyle, CustomSpacing, CustomTypography, DESIGN_SYSTEM_CREATED, DocumentMessage,
    TypographyPreset, VARIABLES_UPDATE, decode,
};
use crate::query::{self, DocumentData};
use crate::session::Session;
use crate::store::DocumentStore;
use crate::systems;

fn post_document<S: DocumentStore>(
    session: &mut Session<S>,
    message_type: &'static str,
    data: DocumentData,
) -> Result<()> {
    let payload = serde_json::to_value(DocumentMessage {
        message_type,
        data,
    })
    .context("Failed to serialize document snapshot")?;
    session.post_message(payload);
    Ok(())
}

pub fn get_variables<'a, S: DocumentStore>(
    session: &'a mut Session<S>,
    _message: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        session.collections().refresh().await?;
        let data = query::all(session.store()).await?;
        tracing::info!(
            "Query complete: {} variables, {} text styles in {} collections",
            data.variables.len(),
            data.text_styles.len(),
            data.collections.len()
        );
        post_document(session, VARIABLES_UPDATE, data)
    })
}

pub fn create_design_system<'a, S: DocumentStore>(
    session: &'a mut Session<S>,
    _message: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let data = systems::design_system(session).await?;
        let summary = format!(
            "Design system created: {} collections, {} variables, {} text styles",
            data.collections.len(),
            data.variables.len(),
            data.text_styles.len()
        );
        post_document(session, DESIGN_SYSTEM_CREATED, data)?;
        session.notify(summary);
        Ok(())
    })
}

pub fn create_custom_spacing<'a, S: DocumentStore>(
    session: &'a mut Session<S>,
    message: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let msg: CustomSpacing = decode(CREATE_CUSTOM_SPACING, message)?;
        tracing::debug!("Creating custom spacing system: {}", msg.path);
        systems::spacing_system(session, &msg.path, msg.base, msg.factor, msg.anchor.as_deref())
            .await?;
        session.notify("Custom spacing system created");
        Ok(())
    })
}

pub fn create_custom_typography<'a, S: DocumentStore>(
    session: &'a mut Session<S>,
    message: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let msg: CustomTypography = decode(CREATE_CUSTOM_TYPOGRAPHY, message)?;
        tracing::debug!("Creating custom typography scale: {}", msg.name);
        systems::typography_scale(
            session,
            &msg.name,
            msg.base_size,
            msg.factor,
            msg.anchor.as_deref(),
        )
        .await?;
        session.notify("Custom typography scale created");
        Ok(())
    })
}

pub fn create_text_style<'a, S: DocumentStore>(
    session: &'a mut Session<S>,
    message: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let msg: CreateTextStyle = decode(CREATE_TEXT_STYLE, message)?;
        systems::create_text_style(session, &msg.name, msg.properties).await?;
        session.notify(format!("Text style created: {}", msg.name));
        Ok(())
    })
}

async fn apply_preset<S: DocumentStore>(session: &mut Session<S>, name: &str) -> Result<()> {
    tracing::debug!("Creating typography preset: {name}");
    let config = systems::preset(name)?;
    systems::typography_system(session, &config).await;
    session.notify(format!("Typography preset created: {name}"));
    Ok(())
}

pub fn create_typography_preset<'a, S: DocumentStore>(
    session: &'a mut Session<S>,
    message: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let msg: TypographyPreset = decode(CREATE_TYPOGRAPHY_PRESET, message)?;
        apply_preset(session, &msg.preset).await
    })
}

pub fn create_typography_system<'a, S: DocumentStore>(
    session: &'a mut Session<S>,
    _message: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(apply_preset(session, "modern"))
}

pub fn close<'a, S: DocumentStore>(
    session: &'a mut Session<S>,
    _message: &'a Value,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        session.close();
        Ok(())
    })
}
