use rust_autonlp::auto::{AutoTokenizer, ResolutionSource, TokenizerClass, TOKENIZER_CONFIG_FILE};
use rust_autonlp::pipelines::common::{Encode, PretrainedTokenizer, TokenizerType};
use rust_autonlp::InitKwargs;
use serde_json::json;
use std::fs;
use std::path::Path;

fn write_bert_dir(directory: &Path, config: serde_json::Value) -> anyhow::Result<()> {
    fs::create_dir_all(directory)?;
    fs::write(
        directory.join("vocab.txt"),
        "[PAD]\n[UNK]\n[CLS]\n[SEP]\n[MASK]\nhello\nworld\n##s\n",
    )?;
    fs::write(
        directory.join(TOKENIZER_CONFIG_FILE),
        serde_json::to_string(&config)?,
    )?;
    Ok(())
}

#[test]
fn local_tokenizer_loads_and_encodes() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let directory = root.path().join("checkpoint");
    write_bert_dir(
        &directory,
        json!({"init_class": "BertTokenizer", "do_lower_case": true}),
    )?;
    let path = directory.to_string_lossy().into_owned();

    let resolution = AutoTokenizer::resolve(&path)?;
    assert_eq!(resolution.class, TokenizerClass::Bert);
    assert_eq!(resolution.source, ResolutionSource::LocalDirectory(directory));

    let tokenizer: PretrainedTokenizer = AutoTokenizer::from_pretrained(&path, &InitKwargs::new())?;
    assert_eq!(tokenizer.tokenizer.tokenizer_type(), TokenizerType::WordPiece);
    assert_eq!(tokenizer.encode("Hello Worlds"), vec![5, 6, 7]);
    Ok(())
}

#[test]
fn caller_can_disable_lower_casing() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let directory = root.path().join("cased");
    write_bert_dir(
        &directory,
        json!({"init_class": "BertTokenizer", "do_lower_case": true}),
    )?;

    let overrides = json!({"do_lower_case": false});
    let tokenizer: PretrainedTokenizer = AutoTokenizer::from_pretrained(
        &directory.to_string_lossy(),
        overrides.as_object().unwrap(),
    )?;
    assert_eq!(tokenizer.encode("Hello world"), vec![1, 6]);
    Ok(())
}

#[test]
fn pattern_inference_prefers_earlier_table_entries() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let directory = root.path().join("my-distilbert-finetuned");
    write_bert_dir(&directory, json!({}))?;

    let resolution = AutoTokenizer::resolve(&directory.to_string_lossy())?;
    assert_eq!(resolution.class, TokenizerClass::DistilBert);
    assert!(resolution.inferred_from_pattern);
    Ok(())
}
