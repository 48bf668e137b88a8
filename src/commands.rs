use std::error::Error;
use std::io::Write;

use cobalt_blocks::validate::{Violation, check_family};
use cobalt_blocks::{BlockId, BlockRegistry, Family, RegistryError, Variant};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

fn family_or_err<'r>(reg: &'r BlockRegistry, key: &str) -> Result<Family<'r>, RegistryError> {
    reg.family(key)
        .ok_or_else(|| RegistryError::UnknownFamily(key.to_string()))
}

fn describe(out: &mut impl Write, v: Variant<'_>) -> std::io::Result<()> {
    writeln!(
        out,
        "{}:{} raw={} slot={} code={} hardness={} blast_resistance={} attrs={:?}",
        v.family().key(),
        v.name(),
        v.raw(),
        v.slot(),
        v.code(),
        v.hardness(),
        v.blast_resistance(),
        v.attributes()
    )
}

pub fn families(reg: &BlockRegistry, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    for family in reg.families() {
        let desc = family.descriptor();
        let ids = match desc.secondary_id {
            Some(second) => format!("{}/{}", desc.primary_id, second),
            None => desc.primary_id.to_string(),
        };
        let caps: Vec<&str> = desc.capabilities().iter().map(|c| c.name()).collect();
        writeln!(
            out,
            "{:<24} {:<8} {:>3} variants  {}",
            desc.key,
            ids,
            family.types().len(),
            caps.join(",")
        )?;
    }
    Ok(())
}

pub fn list(reg: &BlockRegistry, key: &str, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let family = family_or_err(reg, key)?;
    writeln!(out, "{} ({})", family.key(), family.descriptor().display_name)?;
    for v in family.types() {
        writeln!(
            out,
            "  {:<9} {:>2}  {:<28} hardness={}",
            v.slot(),
            v.code(),
            v.name(),
            v.hardness()
        )?;
    }
    Ok(())
}

pub fn decode(
    reg: &BlockRegistry,
    block_id: BlockId,
    data: u8,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let v = reg
        .get_by_raw(block_id, data)
        .ok_or_else(|| format!("no variant registered at {block_id}:{data}"))?;
    describe(out, v)?;
    Ok(())
}

pub fn lookup(
    reg: &BlockRegistry,
    key: &str,
    name: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let family = family_or_err(reg, key)?;
    let v = family
        .get_by_enum_name(name)
        .ok_or_else(|| format!("{} has no variant named {name:?}", family.key()))?;
    describe(out, v)?;
    Ok(())
}

/// Checks every family in parallel. Returns the violations found, sorted by family order.
pub fn validate(
    reg: &BlockRegistry,
    threads: Option<usize>,
) -> Result<Vec<Violation>, Box<dyn Error>> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads.unwrap_or(0))
        .thread_name(|i| format!("cobalt-validate-{i}"))
        .build()?;
    let families: Vec<Family<'_>> = reg.families().collect();
    let violations = pool.install(|| {
        families
            .par_iter()
            .flat_map_iter(|family| check_family(*family))
            .collect::<Vec<_>>()
    });
    log::info!(
        target: "validate",
        "checked {} families, {} variants: {} violation(s)",
        families.len(),
        reg.len(),
        violations.len()
    );
    Ok(violations)
}
