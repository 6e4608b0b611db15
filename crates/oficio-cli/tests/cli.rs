use std::fs;
use std::io::Read;
use std::path::Path;

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use predicates::prelude::*;
use tempfile::TempDir;

fn write_report(path: &Path, lines: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 10.into()]),
        Operation::new("TL", vec![14.into()]),
        Operation::new("Td", vec![50.into(), 780.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let kids: Vec<Object> = vec![page_id.into()];
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).unwrap();
}

fn sample_report(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("bo_123.pdf");
    write_report(
        &path,
        &[
            "BOLETIM DE OCORRENCIA No: 123/2025",
            "Data/Hora do Fato Inicio: 01/01/2025 10:00",
            "IMEI: 123456789012345",
        ],
    );
    path
}

/// Command isolated from any config file in the user's home.
fn oficio(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("oficio").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path()).env("HOME", home.path());
    cmd
}

fn document_xml(docx: &Path) -> String {
    let file = fs::File::open(docx).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

#[test]
fn generate_writes_letter() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let report = sample_report(work.path());
    let out = work.path().join("out");

    oficio(&home)
        .arg("generate")
        .arg(&report)
        .args(["--number", "023/2025"])
        .args(["--start", "01/12/2024", "--end", "31/01/2025", "--date", "05/02/2025"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 registro(s) extraído(s)"));

    let docx = out.join("Oficio_023_2025.docx");
    assert!(docx.exists());

    let xml = document_xml(&docx);
    assert!(xml.contains("123/2025"));
    assert!(xml.contains("123456789012345"));
    assert!(xml.contains("01/12/2024 a 31/01/2025"));
    assert!(xml.contains("Manaus/AM, 5 de FEVEREIRO de 2025."));
}

#[test]
fn generate_rejects_invalid_date() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let report = sample_report(work.path());

    oficio(&home)
        .arg("generate")
        .arg(&report)
        .args(["--number", "023/2025", "--start", "31/13/2025"])
        .arg("--output-dir")
        .arg(work.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("31/13/2025"));

    assert!(!work.path().join("Oficio_023_2025.docx").exists());
}

#[test]
fn generate_without_records_writes_nothing() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let broken = work.path().join("broken.pdf");
    fs::write(&broken, b"not a pdf").unwrap();

    oficio(&home)
        .arg("generate")
        .arg(&broken)
        .args(["--number", "023/2025", "--date", "05/02/2025"])
        .arg("--output-dir")
        .arg(work.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum dado foi extraído dos arquivos."))
        .stderr(predicate::str::contains("Erro ao extrair dados do PDF"));

    assert!(!work.path().join("Oficio_023_2025.docx").exists());
}

#[test]
fn extract_outputs_json() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let report = sample_report(work.path());

    let output = oficio(&home)
        .arg("extract")
        .arg(&report)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["report_number"], "123/2025");
    assert_eq!(value[0]["device_id_2"], "Não encontrado");
    assert_eq!(value[0]["source_file_name"], "bo_123.pdf");
}

#[test]
fn extract_fails_without_inputs() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    oficio(&home)
        .arg("extract")
        .arg(work.path().join("*.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching PDF files"));
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();

    oficio(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("document_code"))
        .stdout(predicate::str::contains("Manaus/AM"));
}

#[test]
fn config_set_writes_the_selected_file() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let config = work.path().join("my.json");

    oficio(&home)
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "letter.document_code", "2500210999"])
        .assert()
        .success();

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&config).unwrap()).unwrap();
    assert_eq!(saved["letter"]["document_code"], "2500210999");
    assert!(!home.path().join("oficio").join("config.json").exists());

    oficio(&home)
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "letter.document_code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"2500210999\""));
}
