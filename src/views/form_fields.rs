// ============================================================================
// FORM FIELDS - Primitivas de formulario compartidas (crear/editar)
// ============================================================================
// Inputs genéricos ligados al PackageForm del estado. La lista de destinos
// se re-renderiza de forma incremental (solo el contenedor #destination-list)
// para no perder los valores del resto del formulario.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::events::{on_change, on_click, on_input, on_keydown};
use crate::dom::{
    append_child, clear_input_value, create_element, event_input_value, set_attribute,
    set_inner_html, ElementBuilder,
};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::state::package_form::PackageForm;
use crate::utils::i18n::t;

/// Setter de un campo de texto del formulario
pub type FieldSetter = fn(&mut PackageForm, String);

/// Crear campo de texto simple ligado al formulario
pub fn create_text_field(
    state: &AppState,
    label: &str,
    id: &str,
    value: &str,
    setter: FieldSetter,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", "text")?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "value", value)?;

    {
        let state_clone = state.clone();
        on_input(&input, move |e: web_sys::Event| {
            if let Some(input_el) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                setter(&mut state_clone.form.borrow_mut(), input_el.value());
            }
        })?;
    }

    append_child(&group, &label_el)?;
    append_child(&group, &input)?;

    Ok(group)
}

/// Crear campo multilínea (descripción)
pub fn create_textarea_field(
    state: &AppState,
    label: &str,
    id: &str,
    value: &str,
    setter: FieldSetter,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group form-group-wide").build();

    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();

    let textarea = ElementBuilder::new("textarea")?
        .id(id)?
        .attr("rows", "4")?
        .text(value)
        .build();

    {
        let state_clone = state.clone();
        on_input(&textarea, move |e: web_sys::Event| {
            if let Some(area) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                setter(&mut state_clone.form.borrow_mut(), area.value());
            }
        })?;
    }

    append_child(&group, &label_el)?;
    append_child(&group, &textarea)?;

    Ok(group)
}

/// Crear campo de imagen con preview.
/// Al seleccionar un archivo se guarda su object URL en el formulario;
/// la subida real la hace el backend al persistir.
pub fn create_file_field(
    state: &AppState,
    label: &str,
    id: &str,
    preview_url: &str,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group form-group-wide").build();

    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", "file")?;
    set_attribute(&input, "accept", "image/*")?;
    set_attribute(&input, "id", id)?;

    let preview = ElementBuilder::new("img")?
        .id(&format!("{}-preview", id))?
        .class("image-preview")
        .attr("alt", "")?
        .build();

    if !preview_url.is_empty() {
        set_attribute(&preview, "src", preview_url)?;
    }

    {
        let state_clone = state.clone();
        let preview_clone = preview.clone();
        on_change(&input, move |e: web_sys::Event| {
            let file = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input_el| input_el.files())
                .and_then(|files| files.get(0));

            if let Some(file) = file {
                match web_sys::Url::create_object_url_with_blob(&file) {
                    Ok(url) => {
                        log::info!("🖼️ Imagen seleccionada: {}", file.name());
                        state_clone.form.borrow_mut().image_url = url.clone();
                        let _ = set_attribute(&preview_clone, "src", &url);
                    }
                    Err(e) => {
                        log::error!("❌ Error creando object URL: {:?}", e);
                    }
                }
            }
        })?;
    }

    append_child(&group, &label_el)?;
    append_child(&group, &input)?;
    append_child(&group, &preview)?;

    Ok(group)
}

/// Crear la sección de destinos: buffer de texto + botón Ajouter + lista
pub fn create_destination_section(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language.borrow().clone();

    let section = ElementBuilder::new("div")?
        .class("form-group form-group-wide destination-section")
        .build();

    let label_el = ElementBuilder::new("label")?
        .text(&t("destinations", &lang))
        .build();

    // Input buffer + botón
    let input_row = ElementBuilder::new("div")?.class("destination-input-row").build();

    let input = create_element("input")?;
    set_attribute(&input, "type", "text")?;
    set_attribute(&input, "id", "destination-input")?;
    set_attribute(&input, "placeholder", &t("saisir_destination", &lang))?;
    // Pintar el buffer en curso: un re-render completo con el modal abierto
    // (p. ej. cambio de idioma) no debe perder el texto tipeado
    set_attribute(&input, "value", &state.form.borrow().destination_input)?;

    {
        let state_clone = state.clone();
        on_input(&input, move |e: web_sys::Event| {
            if let Some(value) = event_input_value(&e) {
                state_clone.form.borrow_mut().destination_input = value;
            }
        })?;
    }

    // Enter agrega el destino sin cerrar el modal
    {
        let state_clone = state.clone();
        on_keydown(&input, move |e: web_sys::KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add_destination_from_buffer(&state_clone);
            }
        })?;
    }

    let add_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-add-destination")
        .text(&t("ajouter", &lang))
        .build();

    {
        let state_clone = state.clone();
        on_click(&add_btn, move |_| {
            add_destination_from_buffer(&state_clone);
        })?;
    }

    append_child(&input_row, &input)?;
    append_child(&input_row, &add_btn)?;

    // Lista scrolleable de destinos
    let list = ElementBuilder::new("div")?
        .id("destination-list")?
        .class("destination-list")
        .build();

    render_destination_rows(&list, state)?;

    append_child(&section, &label_el)?;
    append_child(&section, &input_row)?;
    append_child(&section, &list)?;

    Ok(section)
}

/// Agregar el buffer a la lista y refrescar solo la lista en el DOM
fn add_destination_from_buffer(state: &AppState) {
    let added = state.form.borrow_mut().add_destination();
    if !added {
        // Buffer en blanco: el estado lo conserva, el input tampoco se toca
        return;
    }
    // El buffer quedó limpio en el estado; reflejarlo en el input
    clear_input_value("destination-input");

    crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::DestinationList));
}

/// Renderizar las filas de la lista de destinos dentro del contenedor.
/// Se invoca al montar la sección y en cada add/remove incremental.
pub fn render_destination_rows(container: &Element, state: &AppState) -> Result<(), JsValue> {
    let lang = state.language.borrow().clone();

    // Limpiar lista anterior
    set_inner_html(container, "");

    let destinations = state.form.borrow().destinations.clone();

    if destinations.is_empty() {
        let empty_msg = ElementBuilder::new("p")?
            .class("destination-empty")
            .text(&t("aucune_destination", &lang))
            .build();
        append_child(container, &empty_msg)?;
        return Ok(());
    }

    for (index, dest) in destinations.iter().enumerate() {
        let row = ElementBuilder::new("div")?.class("destination-item").build();

        let name = ElementBuilder::new("span")?.text(dest).build();

        let remove_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-remove-destination")
            .text("✖")
            .build();

        {
            let state_clone = state.clone();
            on_click(&remove_btn, move |_| {
                state_clone.form.borrow_mut().remove_destination(index);
                crate::rerender_app_with_type(UpdateType::Incremental(
                    IncrementalUpdate::DestinationList,
                ));
            })?;
        }

        append_child(&row, &name)?;
        append_child(&row, &remove_btn)?;
        append_child(container, &row)?;
    }

    Ok(())
}
