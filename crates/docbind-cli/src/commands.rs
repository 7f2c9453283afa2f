use std::fs;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;

use docbind_import::{
    DuplicateHeaderPolicy, DynamicRecord, ImportOptions, dynamic_schema, import_sheet,
};
use docbind_model::{CancelToken, FieldError, FieldSchema, ImportReport, SheetDescriptor};
use docbind_report::{annotate_errors, seed_key_sheet};
use docbind_sheet::UmyaWorkbook;
use docbind_transform::{denormalize, denormalize_payload};

use crate::cli::{DenormalizeArgs, ExportArgs, ImportArgs, ProtectArgs};

/// On-disk import schema: a sheet descriptor plus the field list.
#[derive(Debug, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub sheet: SheetDescriptor,
    pub fields: Vec<FieldSchema>,
}

/// What `import` reports back to the terminal.
pub struct ImportSummary {
    pub report: ImportReport<DynamicRecord>,
    pub errors: Vec<FieldError>,
    pub annotated: Option<std::path::PathBuf>,
}

pub fn run_import(args: &ImportArgs) -> Result<ImportSummary> {
    let schema_text = fs::read_to_string(&args.schema)
        .with_context(|| format!("read schema: {}", args.schema.display()))?;
    let schema_file: SchemaFile = serde_json::from_str(&schema_text)
        .with_context(|| format!("parse schema: {}", args.schema.display()))?;
    let schema = dynamic_schema(schema_file.sheet, schema_file.fields);

    let mut book = UmyaWorkbook::from_path(&args.workbook)
        .with_context(|| format!("open workbook: {}", args.workbook.display()))?;

    let options = ImportOptions {
        check_template_key: args.check_template,
        duplicate_headers: if args.reject_duplicate_headers {
            DuplicateHeaderPolicy::Reject
        } else {
            DuplicateHeaderPolicy::LastWins
        },
    };
    let report = import_sheet(&mut book, &schema, &options, &CancelToken::new())
        .context("import workbook")?;
    let errors: Vec<FieldError> = report.field_errors().cloned().collect();

    let mut annotated = None;
    if let Some(out) = &args.annotate {
        if let Some(bytes) = annotate_errors(&mut book, &errors, &CancelToken::new())
            .context("annotate errors")?
        {
            fs::write(out, bytes).with_context(|| format!("write: {}", out.display()))?;
            annotated = Some(out.clone());
        } else {
            info!("no errors, skipping annotated copy");
        }
    }

    Ok(ImportSummary {
        report,
        errors,
        annotated,
    })
}

pub fn run_protect(args: &ProtectArgs) -> Result<()> {
    let mut book = UmyaWorkbook::from_path(&args.input)
        .with_context(|| format!("open workbook: {}", args.input.display()))?;
    let seeded = seed_key_sheet(&mut book).context("seed key sheet")?;
    if !seeded {
        info!("key sheet already present, leaving workbook as-is");
    }
    let bytes = book.save_to_bytes().context("serialize workbook")?;
    fs::write(&args.output, bytes)
        .with_context(|| format!("write: {}", args.output.display()))?;
    Ok(())
}

pub fn run_denormalize(args: &DenormalizeArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("read records: {}", args.input.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parse records: {}", args.input.display()))?;
    let Some(records) = value.as_array() else {
        bail!("expected a JSON array of records");
    };
    let rows = denormalize(records);
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let text = fs::read_to_string(&args.request)
        .with_context(|| format!("read request: {}", args.request.display()))?;
    let mut request: docbind_model::ExportRequest = serde_json::from_str(&text)
        .with_context(|| format!("parse request: {}", args.request.display()))?;
    if !args.raw_payload {
        request.data = denormalize_payload(&request.data);
    }

    let connector =
        docbind_connect::DocumentConnector::new(&args.base_url).context("build client")?;
    let response = connector.export_single(&request).context("export")?;
    if !response.success {
        bail!("export rejected by service: {}", response.code);
    }
    let Some(data) = response.data else {
        bail!("export returned no document data");
    };
    fs::write(&args.out, data).with_context(|| format!("write: {}", args.out.display()))?;
    info!(out = %args.out.display(), "document written");
    Ok(())
}
