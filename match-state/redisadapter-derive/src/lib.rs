extern crate proc_macro;

use lazy_static::lazy_static;
use proc_macro::TokenStream;
use quote::quote;
use std::sync::Mutex;
use syn::{self, DeriveInput, Ident};

struct KnownModel {
    type_name: String,
    impl_type: ImplType,
    collection: String,
}

#[derive(PartialEq)]
enum ImplType {
    InsertWriter,
    OutputReader,
    Identifiable,
    Updater,
}

lazy_static! {
    static ref KNOWN_MODELS: Mutex<Vec<KnownModel>> = Mutex::new(Vec::new());
}

#[proc_macro_derive(RedisInsertWriter, attributes(name))]
pub fn insert_writer_derive(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse(input).unwrap();
    register_model(&ast, ImplType::InsertWriter);
    impl_insert_writer(&ast)
}

#[proc_macro_derive(RedisOutputReader, attributes(uuid))]
pub fn output_reader_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse(input).unwrap();
    register_model(&ast, ImplType::OutputReader);
    impl_output_reader(&ast)
}

#[proc_macro_derive(RedisIdentifiable, attributes(name))]
pub fn identifiable_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse(input).unwrap();
    register_model(&ast, ImplType::Identifiable);
    impl_identifiable(&ast)
}

#[proc_macro_derive(RedisUpdater, attributes(name))]
pub fn updater_derive(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse(input).unwrap();

    register_model(&ast, ImplType::Updater);
    for model in KNOWN_MODELS.lock().unwrap().iter() {
        if model.impl_type == ImplType::InsertWriter && model.collection == get_name_attr(&ast) {
            return impl_updater(&ast, model);
        }
    }
    panic!("No parent struct found for updater. Please make sure the parent struct has been defined before the updater.");
}

fn impl_insert_writer(ast: &syn::DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let data = match &ast.data {
        syn::Data::Struct(data) => data,
        _ => panic!("Only structs are supported"),
    };

    let sets: Vec<proc_macro2::TokenStream> = data
        .fields
        .iter()
        .map(|field| {
            let field_name = field.ident.as_ref().unwrap();
            quote! {
                mt_match_state::adapters::redis::RedisInsertWriter::write(
                    &self.#field_name,
                    pipe,
                    format!("{base_key}:{}", stringify!(#field_name)).as_str(),
                )?;
            }
        })
        .collect();

    let gen = quote! {
        impl mt_match_state::adapters::redis::RedisInsertWriter for #name {
            fn write(&self, pipe: &mut mt_match_state::adapters::redis::Pipeline, base_key: &str) -> Result<(), Box<dyn std::error::Error>> {
                #(#sets)*
                Ok(())
            }
        }
    };
    gen.into()
}

fn impl_output_reader(ast: &syn::DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let data = match &ast.data {
        syn::Data::Struct(data) => data,
        _ => panic!("Only structs are supported"),
    };

    let uuid_field = data
        .fields
        .iter()
        .find(|field| field.attrs.iter().any(|attr| attr.path.is_ident("uuid")))
        .map(|field| field.ident.as_ref().unwrap());

    let sets: Vec<proc_macro2::TokenStream> = data
        .fields
        .iter()
        .filter(|field| uuid_field.is_none() || field.ident.as_ref() != uuid_field)
        .map(|field| {
            let field_name = field.ident.as_ref().unwrap();
            let ty = &field.ty;
            quote! {
                #field_name: <#ty as mt_match_state::adapters::redis::RedisOutputReader>::read(connection, &format!("{base_key}:{}", stringify!(#field_name)))?
            }
        })
        .collect();

    let uuid_code = match uuid_field {
        Some(field) => quote! {
            #field: base_key.to_owned(),
        },
        None => quote! {},
    };

    let gen = quote! {
        impl mt_match_state::adapters::redis::RedisOutputReader for #name {
            fn read(connection: &mut mt_match_state::adapters::redis::Connection, base_key: &str) -> Result<Self, Box<dyn std::error::Error>> {
                Ok(Self {
                    #uuid_code
                    #(#sets),*
                })
            }
        }
    };

    gen.into()
}

fn impl_identifiable(ast: &syn::DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let collection = get_name_attr(ast);

    let gen = quote! {
        impl mt_match_state::adapters::redis::RedisIdentifiable for #name {
            fn name() -> String {
                #collection.to_owned()
            }
        }
    };
    gen.into()
}

fn impl_updater(ast: &syn::DeriveInput, parent: &KnownModel) -> TokenStream {
    let name = &ast.ident;
    let data = match &ast.data {
        syn::Data::Struct(data) => data,
        _ => panic!("Only structs are supported"),
    };

    let sets: Vec<proc_macro2::TokenStream> = data
        .fields
        .iter()
        .map(|field| {
            let field_name = field.ident.as_ref().unwrap();
            quote! {
                if let Some(value) = self.#field_name.as_ref() {
                    mt_match_state::adapters::redis::RedisInsertWriter::write(
                        value,
                        pipe,
                        format!("{uuid}:{}", stringify!(#field_name)).as_str(),
                    )?;
                }
            }
        })
        .collect();

    let option_conversion: Vec<proc_macro2::TokenStream> = data
        .fields
        .iter()
        .map(|field| {
            let field_name = field.ident.as_ref().unwrap();
            quote! {
                #field_name: Some(parent.#field_name.clone()),
            }
        })
        .collect();

    let parent_ident = Ident::new(&parent.type_name, name.span());
    let gen = quote! {
        impl mt_match_state::adapters::redis::RedisUpdater<#parent_ident> for #name {
            fn update(&self, pipe: &mut mt_match_state::adapters::redis::Pipeline, uuid: &str) -> Result<(), Box<dyn std::error::Error>> {
                #(#sets)*
                Ok(())
            }
        }

        impl From<#parent_ident> for #name {
            fn from(parent: #parent_ident) -> Self {
                Self {
                    #(#option_conversion)*
                }
            }
        }
    };
    gen.into()
}

fn get_name_attr(ast: &syn::DeriveInput) -> String {
    for attr in ast.attrs.iter() {
        if attr.path.is_ident("name") {
            return attr.parse_args::<syn::LitStr>().unwrap().value();
        }
    }
    let name = &ast.ident;
    format!("{}s", name.to_string().to_lowercase())
}

fn register_model(ast: &syn::DeriveInput, impl_type: ImplType) {
    let mut known = KNOWN_MODELS.lock().unwrap();
    known.push(KnownModel {
        type_name: ast.ident.to_string(),
        impl_type,
        collection: get_name_attr(ast),
    });
}
