#![cfg(feature = "remote")]

use rust_autonlp::auto::{
    AutoModel, AutoTokenizer, ModelFamily, ResolutionSource, TokenizerClass, MODEL_CONFIG_FILE,
    TOKENIZER_CONFIG_FILE,
};
use rust_autonlp::AutoNlpError;
use std::fs;

#[test]
fn community_resolution_uses_the_configured_hub() -> anyhow::Result<()> {
    let hub = tempfile::tempdir()?;
    let cache = tempfile::tempdir()?;
    std::env::set_var("AUTONLP_CACHE", cache.path());
    std::env::set_var("AUTONLP_COMMUNITY_URL", hub.path());

    //    Published checkpoint
    let published = hub.path().join("someone").join("cool-model");
    fs::create_dir_all(&published)?;
    fs::write(
        published.join(TOKENIZER_CONFIG_FILE),
        r#"{"init_class": "ErnieTokenizer", "do_lower_case": true}"#,
    )?;

    let resolution = AutoTokenizer::resolve("someone/cool-model")?;
    assert_eq!(resolution.class, TokenizerClass::Ernie);
    assert!(matches!(resolution.source, ResolutionSource::Community(_)));
    assert!(!resolution.inferred_from_pattern);

    //    Published checkpoint without init_class
    let published = hub.path().join("someone").join("my-ernie-gram-model");
    fs::create_dir_all(&published)?;
    fs::write(published.join(TOKENIZER_CONFIG_FILE), "{}")?;
    fs::write(published.join(MODEL_CONFIG_FILE), r#"{"num_classes": 2}"#)?;

    let resolution = AutoTokenizer::resolve("someone/my-ernie-gram-model")?;
    assert_eq!(resolution.class, TokenizerClass::ErnieGram);
    assert!(resolution.inferred_from_pattern);
    match &resolution.source {
        ResolutionSource::Community(cached) => assert!(cached.is_file()),
        other => panic!("unexpected source {:?}", other),
    }

    //    "ernie" precedes "ernie-gram" in the base model table
    let resolution = AutoModel::resolve("someone/my-ernie-gram-model")?;
    assert_eq!(resolution.class.family(), ModelFamily::Ernie);
    assert!(resolution.inferred_from_pattern);
    assert!(matches!(resolution.source, ResolutionSource::Community(_)));
    assert_eq!(resolution.init_kwargs["num_classes"], 2);

    //    Missing checkpoint
    match AutoModel::resolve("someone/missing-model") {
        Err(AutoNlpError::UnresolvedIdentifier(identifier)) => {
            assert_eq!(identifier, "someone/missing-model");
            let message = AutoNlpError::UnresolvedIdentifier(identifier).to_string();
            assert!(message.contains("someone/missing-model"));
        }
        other => panic!("unexpected result {:?}", other),
    }
    Ok(())
}
