use rust_autonlp::auto::{
    AutoModel, AutoModelForSequenceClassification, AutoModelForTokenClassification, ModelFamily,
    ModelHead, PretrainedModelConfig, ResolutionSource, MODEL_CONFIG_FILE, MODEL_WEIGHTS_FILE,
};
use rust_autonlp::resources::ResourceProvider;
use rust_autonlp::{AutoNlpError, InitKwargs};
use serde_json::json;
use std::fs;
use std::path::Path;

fn write_model_dir(root: &Path, name: &str, config: serde_json::Value) -> anyhow::Result<String> {
    let directory = root.join(name);
    fs::create_dir_all(&directory)?;
    fs::write(
        directory.join(MODEL_CONFIG_FILE),
        serde_json::to_string(&config)?,
    )?;
    Ok(directory.to_string_lossy().into_owned())
}

#[test]
fn local_directory_with_init_class() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let path = write_model_dir(
        root.path(),
        "checkpoint",
        json!({"init_class": "ErnieForSequenceClassification", "num_classes": 3}),
    )?;

    let resolution = AutoModelForSequenceClassification::resolve(&path)?;
    assert_eq!(resolution.class.family(), ModelFamily::Ernie);
    assert_eq!(resolution.class.head(), ModelHead::SequenceClassification);
    assert!(!resolution.inferred_from_pattern);
    assert_eq!(
        resolution.source,
        ResolutionSource::LocalDirectory(Path::new(&path).to_path_buf())
    );
    assert!(!resolution.init_kwargs.contains_key("init_class"));

    let model: PretrainedModelConfig =
        AutoModelForSequenceClassification::from_pretrained(&path, &InitKwargs::new())?;
    assert_eq!(model.class.to_string(), "ErnieForSequenceClassification");
    assert_eq!(model.num_classes(), Some(3));
    assert_eq!(
        model.weights_resource.get_local_path()?,
        Path::new(&path).join(MODEL_WEIGHTS_FILE)
    );
    Ok(())
}

#[test]
fn local_directory_without_init_class_uses_pattern() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let path = write_model_dir(root.path(), "my-albert-finetuned", json!({"vocab_size": 30000}))?;

    let resolution = AutoModel::resolve(&path)?;
    assert_eq!(resolution.class.family(), ModelFamily::Albert);
    assert!(resolution.inferred_from_pattern);
    assert_eq!(resolution.init_kwargs["vocab_size"], json!(30000));
    Ok(())
}

#[test]
fn caller_kwargs_override_sidecar() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let path = write_model_dir(
        root.path(),
        "ner",
        json!({"init_class": "BertForTokenClassification", "num_classes": 2, "dropout": 0.1}),
    )?;

    let overrides = json!({"num_classes": 7});
    let model: PretrainedModelConfig = AutoModelForTokenClassification::from_pretrained(
        &path,
        overrides.as_object().unwrap(),
    )?;
    assert_eq!(model.num_classes(), Some(7));
    assert_eq!(model.get("dropout"), Some(&json!(0.1)));
    Ok(())
}

#[test]
fn directory_without_sidecar_is_unresolved() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let directory = root.path().join("bert-like");
    fs::create_dir_all(&directory)?;
    let path = directory.to_string_lossy().into_owned();

    match AutoModel::resolve(&path) {
        Err(AutoNlpError::UnresolvedIdentifier(identifier)) => assert_eq!(identifier, path),
        other => panic!("unexpected result {:?}", other),
    }
    Ok(())
}

#[test]
fn invalid_sidecar_is_a_configuration_error() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let directory = root.path().join("broken");
    fs::create_dir_all(&directory)?;
    fs::write(directory.join(MODEL_CONFIG_FILE), "{not json")?;

    let result = AutoModel::resolve(&directory.to_string_lossy());
    assert!(matches!(
        result,
        Err(AutoNlpError::InvalidConfigurationError(_))
    ));
    Ok(())
}

#[test]
fn builtin_identifiers_do_not_touch_the_network() -> anyhow::Result<()> {
    let resolution = AutoModelForSequenceClassification::resolve("ernie-1.0")?;
    assert_eq!(resolution.source, ResolutionSource::BuiltIn);
    assert_eq!(
        resolution.class.to_string(),
        "ErnieForSequenceClassification"
    );
    Ok(())
}

#[cfg(feature = "remote")]
#[test]
fn builtin_weights_point_to_hosted_files() -> anyhow::Result<()> {
    use rust_autonlp::auto::BertModelResources;

    let model: PretrainedModelConfig =
        AutoModel::from_pretrained("bert-base-uncased", &InitKwargs::new())?;
    assert_eq!(model.source, ResolutionSource::BuiltIn);
    let weights = format!("{:?}", model.weights_resource);
    assert!(weights.contains(BertModelResources::BERT_BASE_UNCASED.1));
    assert!(!weights.contains("/community/"));
    Ok(())
}

#[test]
fn builtin_without_hosted_weights_is_unsupported() {
    let result: Result<PretrainedModelConfig, _> =
        AutoModel::from_pretrained("electra-small", &InitKwargs::new());
    assert!(matches!(result, Err(AutoNlpError::Unsupported(_))));
}
