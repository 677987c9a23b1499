//! New-voucher form with a live preview card.
//!
//! The form posts natively to the server; the client only mirrors the typed
//! values into the preview and blocks submission while required fields are
//! invalid.

use crate::shared::components::table::number_format::format_number_vi;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::icon_with;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

const SUBMIT_URL: &str = "/admin/vouchers/create";

pub fn preview_code(code: &str) -> String {
    if code.is_empty() {
        "VOUCHER".to_string()
    } else {
        code.to_uppercase()
    }
}

pub fn preview_description(description: &str) -> String {
    if description.is_empty() {
        "Mô tả voucher".to_string()
    } else {
        description.to_string()
    }
}

pub fn preview_percent(percent: &str) -> String {
    if percent.is_empty() {
        "0".to_string()
    } else {
        percent.to_string()
    }
}

/// Typed amount as `1.500.000đ`, or `---` when empty or not a number
pub fn preview_amount(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{}đ", format_number_vi(value, 3)),
        _ => "---".to_string(),
    }
}

#[component]
fn VoucherPreview(
    code: RwSignal<String>,
    description: RwSignal<String>,
    percent: RwSignal<String>,
    max_discount: RwSignal<String>,
    min_order: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="card border-0 shadow-sm bg-success bg-gradient text-white">
            <div class="card-body">
                <div class="d-flex align-items-center mb-3">
                    {icon_with("ticket-perforated-fill", "fs-2 me-2")}
                    <span class="fs-4 fw-bold" id="previewCode">
                        {move || preview_code(&code.get())}
                    </span>
                </div>
                <p class="mb-3 opacity-75" id="previewDesc">
                    {move || preview_description(&description.get())}
                </p>
                <div class="display-6 fw-bold mb-3">
                    "Giảm "<span id="previewPercent">{move || preview_percent(&percent.get())}</span>"%"
                </div>
                <div class="d-flex justify-content-between small">
                    <span>"Tối đa: "<strong id="previewMax">{move || preview_amount(&max_discount.get())}</strong></span>
                    <span>"Đơn từ: "<strong id="previewMin">{move || preview_amount(&min_order.get())}</strong></span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn VoucherCreatePage() -> impl IntoView {
    let code = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let percent = RwSignal::new(String::new());
    let max_discount = RwSignal::new(String::new());
    let min_order = RwSignal::new(String::new());
    let usage_limit = RwSignal::new(String::new());
    let start_at = RwSignal::new(String::new());
    let end_at = RwSignal::new(String::new());
    let validated = RwSignal::new(false);

    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: SubmitEvent| {
        let valid = form_ref
            .get_untracked()
            .map(|form| form.check_validity())
            .unwrap_or(true);
        if !valid {
            log::debug!("voucher form: blocked submit with invalid fields");
            ev.prevent_default();
            ev.stop_propagation();
        }
        validated.set(true);
    };

    let setter = |signal: RwSignal<String>| Callback::new(move |v: String| signal.set(v));

    view! {
        <div class="container-fluid py-3">
            <div class="d-flex align-items-center justify-content-between mb-3">
                <h4 class="mb-0">"Tạo voucher mới"</h4>
                <a href="/admin/vouchers" class="btn btn-outline-secondary btn-sm">
                    {icon_with("arrow-left", "me-1")}"Quay lại"
                </a>
            </div>
            <div class="row g-4">
                <div class="col-lg-8">
                    <form
                        node_ref=form_ref
                        action=SUBMIT_URL
                        method="post"
                        novalidate=true
                        class=move || if validated.get() { "needs-validation was-validated" } else { "needs-validation" }
                        on:submit=on_submit
                    >
                        <div class="card shadow-sm">
                            <div class="card-body">
                                <Input
                                    name="code"
                                    label="Mã voucher"
                                    value=code
                                    on_input=setter(code)
                                    placeholder="VD: SALE10"
                                    required=true
                                    invalid_text="Vui lòng nhập mã voucher"
                                />
                                <Textarea
                                    name="description"
                                    label="Mô tả"
                                    value=description
                                    on_input=setter(description)
                                    placeholder="Mô tả ngắn về voucher"
                                />
                                <div class="row">
                                    <Input
                                        name="discountPercent"
                                        label="Phần trăm giảm"
                                        value=percent
                                        on_input=setter(percent)
                                        input_type="number"
                                        min="1"
                                        max="100"
                                        required=true
                                        suffix="%"
                                        invalid_text="Nhập giá trị từ 1 đến 100"
                                        class="col-md-4 mb-3"
                                    />
                                    <Input
                                        name="maxDiscountAmount"
                                        label="Giảm tối đa"
                                        value=max_discount
                                        on_input=setter(max_discount)
                                        input_type="number"
                                        min="0"
                                        suffix="đ"
                                        class="col-md-4 mb-3"
                                    />
                                    <Input
                                        name="minOrderValue"
                                        label="Đơn tối thiểu"
                                        value=min_order
                                        on_input=setter(min_order)
                                        input_type="number"
                                        min="0"
                                        suffix="đ"
                                        class="col-md-4 mb-3"
                                    />
                                </div>
                                <div class="row">
                                    <Input
                                        name="usageLimit"
                                        label="Giới hạn lượt dùng"
                                        value=usage_limit
                                        on_input=setter(usage_limit)
                                        input_type="number"
                                        min="1"
                                        placeholder="Không giới hạn"
                                        class="col-md-4 mb-3"
                                    />
                                    <Input
                                        name="startAt"
                                        label="Bắt đầu"
                                        value=start_at
                                        on_input=setter(start_at)
                                        input_type="datetime-local"
                                        required=true
                                        invalid_text="Chọn thời điểm bắt đầu"
                                        class="col-md-4 mb-3"
                                    />
                                    <Input
                                        name="endAt"
                                        label="Kết thúc"
                                        value=end_at
                                        on_input=setter(end_at)
                                        input_type="datetime-local"
                                        required=true
                                        invalid_text="Chọn thời điểm kết thúc"
                                        class="col-md-4 mb-3"
                                    />
                                </div>
                                <div class="form-check form-switch">
                                    <input class="form-check-input" type="checkbox" id="isActive"
                                        name="isActive" value="true" checked=true />
                                    <label class="form-check-label" for="isActive">"Kích hoạt ngay"</label>
                                </div>
                            </div>
                            <div class="card-footer bg-white text-end">
                                <button type="submit" class="btn btn-primary">
                                    {icon_with("check-lg", "me-1")}"Lưu voucher"
                                </button>
                            </div>
                        </div>
                    </form>
                </div>
                <div class="col-lg-4">
                    <h6 class="text-muted mb-2">"Xem trước"</h6>
                    <VoucherPreview
                        code=code
                        description=description
                        percent=percent
                        max_discount=max_discount
                        min_order=min_order
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_for_empty_fields() {
        assert_eq!(preview_code(""), "VOUCHER");
        assert_eq!(preview_description(""), "Mô tả voucher");
        assert_eq!(preview_percent(""), "0");
        assert_eq!(preview_amount(""), "---");
    }

    #[test]
    fn test_typed_values() {
        assert_eq!(preview_code("sale10"), "SALE10");
        assert_eq!(preview_description("Giảm cho đơn đầu"), "Giảm cho đơn đầu");
        assert_eq!(preview_percent("15"), "15");
        assert_eq!(preview_amount("1500000"), "1.500.000đ");
        assert_eq!(preview_amount("0"), "0đ");
    }

    #[test]
    fn test_unparseable_amount() {
        assert_eq!(preview_amount("abc"), "---");
    }
}
