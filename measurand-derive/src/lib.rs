//! Derive macro implementation used by `measurand-core`.
//!
//! `measurand-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, so it is intended to be used by `measurand-core` (or by crates that expose an identical crate-root
//! API).
//!
//! # Generated impls
//!
//! For a unit enumeration `MassUnit`, the derive emits:
//!
//! - two hidden associated constants: the ratio of every variant to the base unit, and the full
//!   variant × variant factor table computed from those ratios at compile time,
//! - a const assertion that the base ratio is exactly `1.0` and every ratio is positive and finite, so a bad
//!   ratio is a compile error,
//! - `crate::Unit for MassUnit`,
//! - `core::fmt::Display for MassUnit` (writes the symbol),
//! - `core::str::FromStr for MassUnit` (symbol lookup through `crate::parse_unit`),
//! - `serde::Serialize` / `serde::Deserialize` as the symbol string, gated on the expanding crate's `serde` feature.
//!
//! # Attributes
//!
//! On the enum, a required `#[unit(...)]` attribute:
//!
//! - `dimension = SomeDim`: dimension marker type
//! - `base = Variant`: the variant that is the dimension's SI base unit
//!
//! On every variant, a required `#[unit(...)]` attribute:
//!
//! - `symbol = "kg"`: displayed unit symbol, unique within the enum
//! - `ratio = 1000.0`: conversion ratio to the base unit, any constant `f64` expression

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Path, Token,
};

/// Derive `crate::Unit` and `Display` for a closed unit enumeration.
///
/// The enum needs `#[unit(dimension = ..., base = ...)]` and every variant needs
/// `#[unit(symbol = "...", ratio = ...)]`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "`Unit` can only be derived for fieldless enums",
            ))
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "unit enums cannot be generic",
        ));
    }

    let container = parse_container_attribute(&input.attrs)?;

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "a unit enum needs at least one variant",
        ));
    }

    let mut idents = Vec::with_capacity(data.variants.len());
    let mut symbols: Vec<LitStr> = Vec::with_capacity(data.variants.len());
    let mut ratios = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "unit variants must not carry fields",
            ));
        }
        if let Some((_, discriminant)) = &variant.discriminant {
            return Err(syn::Error::new_spanned(
                discriminant,
                "unit variants must not declare explicit discriminants",
            ));
        }

        let attr = parse_variant_attribute(&variant.attrs, &variant.ident)?;
        if let Some(previous) = symbols.iter().find(|s| s.value() == attr.symbol.value()) {
            return Err(syn::Error::new(
                attr.symbol.span(),
                format!("duplicate unit symbol \"{}\"", previous.value()),
            ));
        }

        idents.push(&variant.ident);
        symbols.push(attr.symbol);
        ratios.push(attr.ratio);
    }

    let base = &container.base;
    if !idents.iter().any(|ident| *ident == base) {
        return Err(syn::Error::new(
            base.span(),
            format!("base unit `{}` is not a variant of `{}`", base, name),
        ));
    }

    let dimension = &container.dimension;
    let count = idents.len();

    let expanded = quote! {
        impl #name {
            #[doc(hidden)]
            const __RATIOS: [f64; #count] = [#(#ratios),*];

            #[doc(hidden)]
            const __FACTORS: [[f64; #count]; #count] = {
                let mut table = [[1.0_f64; #count]; #count];
                let mut from = 0;
                while from < #count {
                    let mut to = 0;
                    while to < #count {
                        if from != to {
                            table[from][to] = Self::__RATIOS[from] / Self::__RATIOS[to];
                        }
                        to += 1;
                    }
                    from += 1;
                }
                table
            };
        }

        const _: () = {
            let ratios = #name::__RATIOS;
            assert!(
                ratios[#name::#base as usize] == 1.0,
                "the base unit must have a ratio of exactly 1.0"
            );
            let mut i = 0;
            while i < #count {
                assert!(
                    ratios[i] > 0.0 && ratios[i] < f64::INFINITY,
                    "unit ratios must be positive and finite"
                );
                i += 1;
            }
        };

        impl crate::Unit for #name {
            type Dim = #dimension;
            const BASE: Self = Self::#base;
            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            #[inline]
            fn symbol(self) -> &'static str {
                match self {
                    #(Self::#idents => #symbols),*
                }
            }

            #[inline]
            fn ratio(self) -> f64 {
                Self::__RATIOS[self as usize]
            }

            #[inline]
            fn factor_to(self, target: Self) -> f64 {
                Self::__FACTORS[self as usize][target as usize]
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as crate::Unit>::symbol(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::Error;

            fn from_str(symbol: &str) -> ::core::result::Result<Self, Self::Err> {
                crate::parse_unit(symbol)
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                crate::unit_symbol_serde::serialize(self, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                crate::unit_symbol_serde::deserialize(deserializer)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the enum-level `#[unit(...)]` attribute.
struct ContainerAttribute {
    dimension: Path,
    base: Ident,
}

impl Parse for ContainerAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimension: Option<Path> = None;
        let mut base: Option<Ident> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "base" => {
                    base = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let base = base
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `base`"))?;

        Ok(ContainerAttribute { dimension, base })
    }
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct VariantAttribute {
    symbol: LitStr,
    ratio: Expr,
}

impl Parse for VariantAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut ratio: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        if symbol.value().is_empty() {
            return Err(syn::Error::new(symbol.span(), "unit symbol must not be empty"));
        }
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(VariantAttribute { symbol, ratio })
    }
}

fn find_unit_attribute(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident("unit"))
}

fn parse_container_attribute(attrs: &[Attribute]) -> syn::Result<ContainerAttribute> {
    match find_unit_attribute(attrs) {
        Some(attr) => attr.parse_args::<ContainerAttribute>(),
        None => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "missing #[unit(dimension = ..., base = ...)] attribute",
        )),
    }
}

fn parse_variant_attribute(attrs: &[Attribute], variant: &Ident) -> syn::Result<VariantAttribute> {
    match find_unit_attribute(attrs) {
        Some(attr) => attr.parse_args::<VariantAttribute>(),
        None => Err(syn::Error::new(
            variant.span(),
            format!("missing #[unit(symbol = ..., ratio = ...)] attribute on `{}`", variant),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn expand_err(input: DeriveInput) -> String {
        derive_unit_impl(input).err().unwrap().to_string()
    }

    #[test]
    fn test_parse_container_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Mass, base = Kilogram)]
            pub enum MassUnit { Kilogram }
        };

        let attr = parse_container_attribute(&input.attrs).unwrap();
        assert_eq!(attr.base, "Kilogram");
        assert!(attr.dimension.is_ident("Mass"));
    }

    #[test]
    fn test_parse_container_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum MassUnit { Kilogram }
        };

        let err = parse_container_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(dimension"));
    }

    #[test]
    fn test_parse_container_attribute_missing_base() {
        let tokens = quote! { dimension = Mass };
        let err = syn::parse2::<ContainerAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `base`"));
    }

    #[test]
    fn test_parse_container_attribute_missing_dimension() {
        let tokens = quote! { base = Kilogram };
        let err = syn::parse2::<ContainerAttribute>(tokens).err().unwrap();
        assert!(err
            .to_string()
            .contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_container_attribute_qualified_dimension() {
        let tokens = quote! { dimension = crate::units::mass::Mass, base = Kilogram, };
        let attr = syn::parse2::<ContainerAttribute>(tokens).unwrap();
        assert_eq!(attr.dimension.segments.len(), 4);
    }

    #[test]
    fn test_variant_attribute_parse_with_trailing_comma() {
        let tokens = quote! { symbol = "kg", ratio = 1.0, };
        let attr: VariantAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "kg");
    }

    #[test]
    fn test_variant_attribute_parse_expression_ratio() {
        let tokens = quote! { symbol = "lb", ratio = 45_359_237.0 / 100_000_000.0 };
        let attr: VariantAttribute = syn::parse2(tokens).unwrap();
        assert!(matches!(attr.ratio, Expr::Binary(_)));
    }

    #[test]
    fn test_variant_attribute_missing_symbol() {
        let tokens = quote! { ratio = 1.0 };
        let err = syn::parse2::<VariantAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_variant_attribute_missing_ratio() {
        let tokens = quote! { symbol = "kg" };
        let err = syn::parse2::<VariantAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `ratio`"));
    }

    #[test]
    fn test_variant_attribute_empty_symbol() {
        let tokens = quote! { symbol = "", ratio = 1.0 };
        let err = syn::parse2::<VariantAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_variant_attribute_unknown_field() {
        let tokens = quote! { symbol = "kg", ratio = 1.0, plural = "kgs" };
        let err = syn::parse2::<VariantAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `plural`"));
    }

    #[test]
    fn test_parse_empty_variant_attribute() {
        let tokens = quote! {};
        let result: syn::Result<VariantAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Mass, base = Kilogram)]
            pub enum MassUnit {
                #[unit(symbol = "kg", ratio = 1.0)]
                Kilogram,
                #[unit(symbol = "g", ratio = 1e-3)]
                Gram,
            }
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for MassUnit"));
        assert!(code.contains("type Dim = Mass"));
        assert!(code.contains("const BASE : Self = Self :: Kilogram"));
        assert!(code.contains("const __RATIOS : [f64 ; 2usize] = [1.0 , 1e-3]"));
        assert!(code.contains("Self :: Gram => \"g\""));
        assert!(code.contains("impl :: core :: fmt :: Display for MassUnit"));
        assert!(code.contains("impl :: core :: str :: FromStr for MassUnit"));
    }

    #[test]
    fn test_derive_checks_ratios_at_compile_time() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Mass, base = Kilogram)]
            pub enum MassUnit {
                #[unit(symbol = "g", ratio = 1e-3)]
                Gram,
                #[unit(symbol = "kg", ratio = 1.0)]
                Kilogram,
            }
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("const _ : () ="));
        assert!(code.contains("ratios [MassUnit :: Kilogram as usize] == 1.0"));
        assert!(code.contains("ratios [i] > 0.0 && ratios [i] < f64 :: INFINITY"));
        assert!(code.contains("\"unit ratios must be positive and finite\""));
    }

    #[test]
    fn test_derive_factor_table_size() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Time, base = Second)]
            enum TimeUnit {
                #[unit(symbol = "s", ratio = 1.0)]
                Second,
                #[unit(symbol = "min", ratio = 60.0)]
                Minute,
                #[unit(symbol = "h", ratio = 3600.0)]
                Hour,
            }
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("const __FACTORS : [[f64 ; 3usize] ; 3usize]"));
        assert!(code.contains("const VARIANTS : & 'static [Self] = & [Self :: Second , Self :: Minute , Self :: Hour]"));
    }

    #[test]
    fn test_derive_rejects_struct() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Mass, base = Kilogram)]
            pub struct Kilogram;
        };
        assert!(expand_err(input).contains("fieldless enums"));
    }

    #[test]
    fn test_derive_rejects_variant_with_fields() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Mass, base = Kilogram)]
            pub enum MassUnit {
                #[unit(symbol = "kg", ratio = 1.0)]
                Kilogram(f64),
            }
        };
        assert!(expand_err(input).contains("must not carry fields"));
    }

    #[test]
    fn test_derive_rejects_explicit_discriminant() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Mass, base = Kilogram)]
            pub enum MassUnit {
                #[unit(symbol = "kg", ratio = 1.0)]
                Kilogram = 4,
            }
        };
        assert!(expand_err(input).contains("explicit discriminants"));
    }

    #[test]
    fn test_derive_rejects_empty_enum() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Mass, base = Kilogram)]
            pub enum MassUnit {}
        };
        assert!(expand_err(input).contains("at least one variant"));
    }

    #[test]
    fn test_derive_rejects_unknown_base() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Mass, base = Slug)]
            pub enum MassUnit {
                #[unit(symbol = "kg", ratio = 1.0)]
                Kilogram,
            }
        };
        assert!(expand_err(input).contains("base unit `Slug` is not a variant of `MassUnit`"));
    }

    #[test]
    fn test_derive_rejects_duplicate_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Mass, base = Kilogram)]
            pub enum MassUnit {
                #[unit(symbol = "kg", ratio = 1.0)]
                Kilogram,
                #[unit(symbol = "kg", ratio = 1.0)]
                KilogramAgain,
            }
        };
        assert!(expand_err(input).contains("duplicate unit symbol \"kg\""));
    }

    #[test]
    fn test_derive_rejects_missing_variant_attribute() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Mass, base = Kilogram)]
            pub enum MassUnit {
                #[unit(symbol = "kg", ratio = 1.0)]
                Kilogram,
                Gram,
            }
        };
        assert!(expand_err(input).contains("attribute on `Gram`"));
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub enum MassUnit { Kilogram }
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
