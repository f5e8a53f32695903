//! `#[diff(...)]` attribute parsing.

use syn::{Attribute, LitStr};

/// Attributes on the deriving type.
#[derive(Debug, Default)]
pub(crate) struct ContainerAttrs {
    pub scalar: bool,
    pub debug: bool,
    pub krate: Option<syn::Path>,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("diff")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("scalar") {
                    out.scalar = true;
                    Ok(())
                } else if meta.path.is_ident("debug") {
                    out.debug = true;
                    Ok(())
                } else if meta.path.is_ident("crate") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.krate = Some(lit.parse()?);
                    Ok(())
                } else {
                    Err(meta.error(
                        "unknown container attribute; expected `scalar`, `debug`, or `crate`",
                    ))
                }
            })?;
        }
        Ok(out)
    }
}

/// Attributes on one field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
    pub rename: Option<LitStr>,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("diff")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    out.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute; expected `skip` or `rename`"))
                }
            })?;
        }
        Ok(out)
    }
}
