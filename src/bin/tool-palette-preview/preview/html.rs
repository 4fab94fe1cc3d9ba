#![forbid(unsafe_code)]

use super::Section;
use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};

pub fn write_html_grid(
    title: &str,
    sections: &[Section],
    path: impl AsRef<std::path::Path>,
) -> Result<std::path::PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    writeln!(
        w,
        r#"<!doctype html><meta charset="utf-8">
<style>
  body{{margin:0;background:#111;color:#eee;font-family:system-ui}}
  h2,h3{{margin:12px}}
  .p{{display:flex;gap:4px;padding:4px 8px;align-items:center}}
  .s{{width:88px;aspect-ratio:2/1;border-radius:8px;display:flex;align-items:center;
      justify-content:center;font-size:12px;font-weight:700;text-shadow:0 1px 2px rgba(0,0,0,.5)}}
  .d{{margin-left:12px;font-size:13px;opacity:.8}}
</style>
<h2>{title}</h2>"#
    )?;
    for section in sections {
        let Some(first) = section.palettes.first() else {
            continue;
        };
        writeln!(
            w,
            "<h3>{} · {} · {}</h3>",
            section.category.label(),
            first.emotion,
            first.harmony
        )?;
        for palette in &section.palettes {
            write!(w, r#"<div class="p">"#)?;
            for color in &palette.colors {
                write!(w, r#"<div class="s" style="background:{color}">{color}</div>"#)?;
            }
            writeln!(
                w,
                r#"<span class="d">{:.2} · {}</span></div>"#,
                palette.confidence, palette.description
            )?;
        }
    }
    Ok(path.to_path_buf())
}
