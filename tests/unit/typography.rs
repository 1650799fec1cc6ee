//! Typography systems, presets, and font handling.

use std::sync::Arc;

use dsforge::config::DsforgeConfig;
use dsforge::models::{FontName, LineHeight, TextStyleProperties};
use dsforge::session::Session;
use dsforge::store::{DocumentStore, MemoryDocument};
use dsforge::systems::{
    PRESET_NAMES, ScaleConfig, TypographySystemConfig, preset, typography_scale, typography_system,
};
use dsforge::test_utils::{DocumentFixture, FlakyDocument};

#[tokio::test]
async fn every_preset_applies_to_a_fresh_document() {
    for name in PRESET_NAMES {
        let store = Arc::new(MemoryDocument::new());
        let mut session = Session::new(Arc::clone(&store));
        let config = preset(name).unwrap();

        let results = typography_system(&mut session, &config).await;
        let expected = config.scales.len() * 9 + config.semantic.len();
        let created: usize = results.iter().map(|r| r.styles.len()).sum();
        assert_eq!(created, expected, "preset {name}");
        assert_eq!(store.list_text_styles().await.unwrap().len(), expected, "preset {name}");
    }
}

#[tokio::test]
async fn applying_a_preset_twice_updates_in_place() {
    let store = Arc::new(MemoryDocument::new());
    let mut session = Session::new(Arc::clone(&store));
    let config = preset("editorial").unwrap();

    typography_system(&mut session, &config).await;
    let before = store.list_text_styles().await.unwrap();
    typography_system(&mut session, &config).await;
    let after = store.list_text_styles().await.unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn semantic_styles_follow_scales() {
    let mut session = Session::new(Arc::new(MemoryDocument::new()));
    let results = typography_system(&mut session, &preset("ui").unwrap()).await;

    let scales: Vec<&str> = results.iter().map(|r| r.scale.as_str()).collect();
    assert_eq!(scales, vec!["Interface", "semantic", "semantic", "semantic"]);

    let label = &results[3].styles[0];
    assert_eq!(label.name, "Label/Form");
    assert_eq!(label.font_name, FontName::new("Inter", "Medium"));
    assert_eq!(
        label.line_height,
        LineHeight::Pixels {
            value: 16.0,
        }
    );
}

#[tokio::test]
async fn configured_default_font_drives_scales() {
    let config = DsforgeConfig {
        default_font: FontName::regular("Roboto"),
        ..Default::default()
    };
    let mut session = Session::with_config(Arc::new(MemoryDocument::new()), config);

    let styles = typography_scale(&mut session, "Body", 16.0, 1.2, None).await.unwrap();
    assert!(styles.iter().all(|s| s.font_name == FontName::regular("Roboto")));
}

#[tokio::test]
async fn scale_font_override_applies_to_its_styles_only() {
    let mut session = Session::new(Arc::new(MemoryDocument::new()));
    let config = TypographySystemConfig::default()
        .scale("Display", ScaleConfig::new(32.0, 1.25).with_font(FontName::new("Inter", "Bold")))
        .scale("Body", ScaleConfig::new(16.0, 1.125));

    let results = typography_system(&mut session, &config).await;
    assert!(results[0].styles.iter().all(|s| s.font_name == FontName::new("Inter", "Bold")));
    assert!(results[1].styles.iter().all(|s| s.font_name == FontName::default()));
}

#[tokio::test]
async fn missing_fonts_fall_back_for_whole_scale() {
    let store = Arc::new(MemoryDocument::with_fonts(vec![FontName::regular("Helvetica")]));
    let mut session = Session::new(Arc::clone(&store));

    let styles = typography_scale(&mut session, "Caption", 12.0, 1.1, None).await.unwrap();
    assert_eq!(styles.len(), 9);
    assert!(styles.iter().all(|s| s.font_name == FontName::regular("Helvetica")));
}

#[tokio::test]
async fn document_without_fonts_yields_no_styles() {
    let store = Arc::new(DocumentFixture::without_fonts().store().unwrap());
    let mut session = Session::new(Arc::clone(&store));

    let results = typography_system(&mut session, &preset("classic").unwrap()).await;
    assert!(results.iter().all(|r| r.styles.is_empty()));
    // the semantic style never got a font, so it is not reported at all
    assert!(results.iter().all(|r| r.scale != "semantic"));
}

#[tokio::test]
async fn rejected_semantic_style_leaves_the_rest() {
    let store = Arc::new(FlakyDocument::new(MemoryDocument::new()));
    store.reject("Button/Small").await;
    let mut session = Session::new(Arc::clone(&store));

    let results = typography_system(&mut session, &preset("ui").unwrap()).await;
    let names: Vec<&str> = results
        .iter()
        .filter(|r| r.scale == "semantic")
        .flat_map(|r| r.styles.iter().map(|s| s.name.as_str()))
        .collect();
    assert_eq!(names, vec!["Button/Large", "Label/Form"]);
}

#[tokio::test]
async fn existing_style_keeps_its_id_when_restyled() {
    let store = Arc::new(DocumentFixture::existing_colors().store().unwrap());
    let mut session = Session::new(Arc::clone(&store));

    let styles = typography_scale(&mut session, "Body", 18.0, 1.2, None).await.unwrap();
    let base = styles.iter().find(|s| s.name == "Body/base").unwrap();
    assert_eq!(base.id, "S:3");
    assert_eq!(base.font_size, 18.0);

    let partial = TextStyleProperties {
        font_size: Some(20.0),
        ..Default::default()
    };
    let updated = dsforge::systems::create_text_style(&mut session, "Body/base", partial)
        .await
        .unwrap();
    assert_eq!(updated.id, "S:3");
    assert_eq!(
        updated.line_height,
        LineHeight::Percent {
            value: 140.0,
        }
    );
}
