//! Resume upload area component
//!
//! Drag-and-drop zone with click-to-browse. Accepts a single PDF or
//! DOCX file and hands its bytes to the parent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File};

#[component]
pub fn UploadArea<F>(
    selected_name: ReadSignal<Option<String>>,
    disabled: ReadSignal<bool>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(String, Vec<u8>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_file = {
        let on_file_selected = on_file_selected.clone();
        move |file: File| {
            read_file(file, on_file_selected.clone());
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if disabled.get() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_file = handle_file.clone();
        move |_| {
            if disabled.get() {
                return;
            }

            // open the file picker
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept(".pdf,.docx");

            let handle_file = handle_file.clone();
            let picker = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = picker.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if disabled.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📄"</div>
            {move || match selected_name.get() {
                Some(name) => view! {
                    <p>"Selected file: " <span class="selected-file">{name}</span></p>
                }.into_any(),
                None => view! {
                    <p>"Drop your resume here or click to browse"</p>
                }.into_any(),
            }}
            <p class="text-muted">"Supports PDF and DOCX files"</p>
        </div>
    }
}

fn read_file<F>(file: File, on_file_selected: F)
where
    F: Fn(String, Vec<u8>) + 'static,
{
    let file_name = file.name();
    let blob = gloo::file::Blob::from(file);

    spawn_local(async move {
        match gloo::file::futures::read_as_bytes(&blob).await {
            Ok(bytes) => on_file_selected(file_name, bytes),
            Err(e) => {
                web_sys::console::error_1(&format!("File read error: {}", e).into());
            }
        }
    });
}
