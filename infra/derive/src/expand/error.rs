use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Type, Variant};

/// Parsed view of an error enum.
struct ErrorShape<'a> {
    name: &'a Ident,
    ext: Ident,
    variants: Vec<VariantShape<'a>>,
}

/// Parsed view of a single variant.
struct VariantShape<'a> {
    ident: &'a Ident,
    cfg: Vec<&'a Attribute>,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    has_message: bool,
}

pub(crate) fn expand(input: &DeriveInput) -> TokenStream {
    match ErrorShape::parse(input) {
        Ok(shape) => shape.render(input),
        Err(err) => err.to_compile_error(),
    }
}

impl<'a> ErrorShape<'a> {
    fn parse(input: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(syn::Error::new(
                input.ident.span(),
                "dialecta_error can only be applied to enums",
            ));
        };

        let variants =
            data.variants.iter().map(VariantShape::parse).collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { name: &input.ident, ext: format_ident!("{}Ext", input.ident), variants })
    }

    fn render(&self, input: &DeriveInput) -> TokenStream {
        let derives = self.missing_derives(&input.attrs);
        let context_trait = self.context_trait();
        let conversions = self.variants.iter().filter_map(|v| self.source_conversion(v));
        let internal = self.internal_conversions();

        quote! {
            #[allow(non_shorthand_field_patterns)]
            #derives
            #input

            #context_trait
            #(#conversions)*
            #internal

            #[allow(dead_code)]
            fn format_context(
                context: &Option<std::borrow::Cow<'static, str>>,
            ) -> std::borrow::Cow<'static, str> {
                match context {
                    Some(c) => std::borrow::Cow::Owned(format!(" ({c})")),
                    None => std::borrow::Cow::Borrowed(""),
                }
            }
        }
    }

    fn missing_derives(&self, attrs: &[Attribute]) -> TokenStream {
        let present = derived_names(attrs);
        let mut wanted = Vec::new();
        if !present.contains("Debug") {
            wanted.push(quote! { Debug });
        }
        if !present.contains("Error") {
            wanted.push(quote! { ::thiserror::Error });
        }
        if wanted.is_empty() { quote! {} } else { quote! { #[derive(#(#wanted),*)] } }
    }

    fn context_trait(&self) -> TokenStream {
        let name = self.name;
        let ext = &self.ext;
        let arms = self.variants.iter().filter(|v| v.has_context).map(|v| {
            let ident = v.ident;
            let cfg = &v.cfg;
            quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
        });

        quote! {
            pub trait #ext<T> {
                fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
            }

            #[automatically_derived]
            impl<T> #ext<T> for Result<T, #name> {
                #[inline]
                fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                    self.map_err(|mut err| {
                        match &mut err {
                            #(#arms)*
                            #[allow(unreachable_patterns)]
                            _ => {}
                        }
                        err
                    })
                }
            }
        }
    }

    fn source_conversion(&self, v: &VariantShape<'_>) -> Option<TokenStream> {
        if v.ident == "Internal" {
            return None;
        }
        let (field, ty) = v.source?;
        let name = self.name;
        let ext = &self.ext;
        let ident = v.ident;
        let cfg = &v.cfg;

        Some(quote! {
            #(#cfg)*
            #[automatically_derived]
            impl From<#ty> for #name {
                #[inline]
                fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
            }

            #(#cfg)*
            impl<T> #ext<T> for std::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<std::borrow::Cow<'static, str>>,
                ) -> std::result::Result<T, #name> {
                    self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
                }
            }
        })
    }

    fn internal_conversions(&self) -> TokenStream {
        let Some(internal) =
            self.variants.iter().find(|v| v.ident == "Internal" && v.has_message && v.has_context)
        else {
            return quote! {};
        };
        let name = self.name;
        let cfg = &internal.cfg;

        quote! {
            #(#cfg)*
            impl From<&'static str> for #name {
                #[inline]
                fn from(s: &'static str) -> Self {
                    Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None }
                }
            }

            #(#cfg)*
            impl From<String> for #name {
                #[inline]
                fn from(s: String) -> Self {
                    Self::Internal { message: std::borrow::Cow::Owned(s), context: None }
                }
            }
        }
    }
}

impl<'a> VariantShape<'a> {
    fn parse(v: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &v.fields else {
            return Err(syn::Error::new_spanned(
                v,
                "dialecta_error requires named fields for source/context handling",
            ));
        };

        let mut has_context = false;
        let mut has_message = false;
        let mut source = None;

        for field in &fields.named {
            let Some(ident) = field.ident.as_ref() else { continue };
            if ident == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new(
                        field.ty.span(),
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            } else if ident == "message" {
                has_message = true;
            } else if source.is_none() && is_source_field(field) {
                source = Some((ident, &field.ty));
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &v.ident,
                "dialecta_error requires `context: Option<Cow<'static, str>>` for variants with a source",
            ));
        }

        Ok(Self {
            ident: &v.ident,
            cfg: v.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect(),
            source,
            has_context,
            has_message,
        })
    }
}

fn is_source_field(field: &Field) -> bool {
    field.ident.as_ref().is_some_and(|i| i == "source")
        || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
}

/// Accepts `Option<Cow<'static, str>>` with or without a path prefix on `Cow`.
fn is_context_type(ty: &Type) -> bool {
    let rendered: String = quote!(#ty).to_string().chars().filter(|c| !c.is_whitespace()).collect();
    let Some(inner) = rendered.strip_prefix("Option<").and_then(|s| s.strip_suffix('>')) else {
        return false;
    };
    inner == "Cow<'static,str>" || inner.ends_with("::Cow<'static,str>")
}

fn derived_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut names = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                names.insert(last.ident.to_string());
            }
            Ok(())
        });
    }
    names
}
