//! Shared helpers for building DOCX templates in integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Builder for in-memory `.docx` packages.
#[derive(Default)]
pub struct DocxBuilder {
    body: String,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph with the given style id.
    pub fn styled(mut self, style: &str, text: &str) -> Self {
        self.body.push_str(&format!(
            r#"<w:p><w:pPr><w:pStyle w:val="{}"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            style,
            escape(text)
        ));
        self
    }

    /// Add a `HeadingN` paragraph.
    pub fn heading(self, level: i32, text: &str) -> Self {
        self.styled(&format!("Heading{}", level), text)
    }

    /// Add a plain paragraph.
    pub fn paragraph(mut self, text: &str) -> Self {
        self.body.push_str(&format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            escape(text)
        ));
        self
    }

    /// Add a paragraph whose text is split across several runs.
    pub fn runs(mut self, parts: &[&str]) -> Self {
        self.body.push_str("<w:p>");
        for part in parts {
            self.body.push_str(&format!(
                r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#,
                escape(part)
            ));
        }
        self.body.push_str("</w:p>");
        self
    }

    /// Add a table, one paragraph per cell.
    pub fn table(mut self, rows: &[&[&str]]) -> Self {
        self.body.push_str("<w:tbl><w:tblPr/>");
        for row in rows {
            self.body.push_str("<w:tr>");
            for cell in *row {
                self.body.push_str(&format!(
                    "<w:tc><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:tc>",
                    escape(cell)
                ));
            }
            self.body.push_str("</w:tr>");
        }
        self.body.push_str("</w:tbl>");
        self
    }

    /// Add raw body XML.
    pub fn raw(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    /// The `word/document.xml` content.
    pub fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            self.body
        )
    }

    /// Build the package bytes.
    pub fn build(&self) -> Vec<u8> {
        zip_parts(&[("word/document.xml", &self.document_xml())])
    }
}

/// Build a ZIP package with the given parts.
pub fn zip_parts(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A project application form: a key/value table and a members table.
pub fn table_form() -> Vec<u8> {
    let mut members: Vec<Vec<String>> = vec![vec![
        "序号".into(),
        "姓名".into(),
        "职务".into(),
        "联系方式".into(),
    ]];
    for i in 1..=3 {
        members.push(vec![
            i.to_string(),
            format!("${{member_{}_name}}", i),
            format!("${{member_{}_position}}", i),
            format!("${{member_{}_contact}}", i),
        ]);
    }
    let member_rows: Vec<Vec<&str>> = members
        .iter()
        .map(|row| row.iter().map(String::as_str).collect())
        .collect();
    let member_refs: Vec<&[&str]> = member_rows.iter().map(Vec::as_slice).collect();

    DocxBuilder::new()
        .heading(1, "项目申请表")
        .table(&[
            &["项目名称", "${project_name}"],
            &["申请日期", "${apply_date}"],
            &["负责人", "${project_leader}"],
            &["联系电话", "${contact_phone}"],
        ])
        .paragraph("项目成员信息：")
        .table(&member_refs)
        .build()
}
