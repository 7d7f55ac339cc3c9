// crates/relativist-cli/src/io/jsonl.rs

use anyhow::Context;
use relativist_core::color::{to_hex, Hsl};
use relativist_core::session::palette::Band;
use relativist_core::shape::shape_for_hue;

/// One palette slot per line:
/// {"index":N,"band":"hero","h":H,"s":S,"l":L,"hex":"#RRGGBB","shape":"block"}
pub fn palette_lines(palette: &[Hsl]) -> anyhow::Result<Vec<String>> {
    palette
        .iter()
        .enumerate()
        .map(|(index, c)| {
            let line = serde_json::json!({
                "index": index,
                "band": Band::of(index),
                "h": c.h,
                "s": c.s,
                "l": c.l,
                "hex": to_hex(*c),
                "shape": shape_for_hue(c.h),
            });
            serde_json::to_string(&line).with_context(|| format!("encode palette slot {index}"))
        })
        .collect()
}

pub fn write_palette_stdout(palette: &[Hsl]) -> anyhow::Result<()> {
    for line in palette_lines(palette)? {
        println!("{line}");
    }
    Ok(())
}
