//! Static content pages: company info, policies and the FAQ. All content is
//! hardcoded; the contact form only acknowledges locally.

use crate::toast::use_toast;
use crate::validate::is_valid_email;
use leptos::prelude::*;

const ABOUT_PARAGRAPHS: &[&str] = &[
    "HUSTBuy là sàn thương mại điện tử được xây dựng bởi và dành cho cộng đồng \
     Đại học Bách Khoa Hà Nội.",
    "Chúng tôi kết nối người mua với các cửa hàng đã được xác minh, từ đồ điện tử, \
     giáo trình đến thời trang sinh viên.",
    "Mọi người bán trên HUSTBuy đều trải qua quy trình xác minh hồ sơ trước khi \
     được mở gian hàng.",
];

const CAREERS_PARAGRAPHS: &[&str] = &[
    "HUSTBuy luôn chào đón các bạn sinh viên và kỹ sư trẻ đam mê thương mại điện tử.",
    "Các vị trí đang mở: kỹ sư phần mềm, thiết kế sản phẩm, vận hành sàn và \
     chăm sóc khách hàng.",
    "Gửi CV về tuyendung@hustbuy.vn với tiêu đề [Ứng tuyển] - [Vị trí] - [Họ tên].",
];

const SHIPPING_PARAGRAPHS: &[&str] = &[
    "Đơn hàng nội thành Hà Nội được giao trong 1-2 ngày làm việc; các tỉnh thành \
     khác từ 3-5 ngày làm việc.",
    "Phí vận chuyển hiển thị tại bước thanh toán và phụ thuộc vào khối lượng đơn \
     hàng cùng địa chỉ nhận.",
    "Đơn hàng từ 500.000 ₫ được miễn phí vận chuyển tiêu chuẩn.",
];

const RETURNS_PARAGRAPHS: &[&str] = &[
    "Bạn có thể yêu cầu đổi trả trong vòng 7 ngày kể từ khi nhận hàng nếu sản phẩm \
     bị lỗi do nhà sản xuất hoặc không đúng mô tả.",
    "Sản phẩm đổi trả cần còn nguyên tem, hộp và đầy đủ phụ kiện đi kèm.",
    "Chi phí vận chuyển đổi trả do HUSTBuy chi trả nếu lỗi thuộc về người bán.",
];

const WARRANTY_PARAGRAPHS: &[&str] = &[
    "Sản phẩm điện tử được bảo hành chính hãng theo thời hạn công bố của từng \
     nhà sản xuất, tối thiểu 12 tháng.",
    "Thông tin bảo hành được ghi trên trang chi tiết của từng sản phẩm.",
    "Khi cần bảo hành, liên hệ người bán qua trang đơn hàng hoặc gửi yêu cầu tới \
     bộ phận hỗ trợ của HUSTBuy.",
];

const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "Làm sao để theo dõi đơn hàng?",
        "Vào Tài khoản > Đơn hàng để xem trạng thái mới nhất của từng đơn.",
    ),
    (
        "Tôi có thể hủy đơn hàng không?",
        "Đơn hàng ở trạng thái Chờ xác nhận có thể hủy trực tiếp từ trang Đơn hàng.",
    ),
    (
        "Làm sao để trở thành người bán?",
        "Vào Tài khoản > Kênh người bán, điền hồ sơ cửa hàng và gửi duyệt. Hồ sơ sẽ được \
         quản trị viên xét duyệt trong 2-3 ngày làm việc.",
    ),
    (
        "Voucher được áp dụng như thế nào?",
        "Voucher của shop áp dụng cho các sản phẩm của shop đó; voucher HUSTBuy áp dụng \
         trên tổng giá trị các sản phẩm đã chọn, khi đạt giá trị đơn tối thiểu.",
    ),
];

#[component]
fn StaticArticle(title: &'static str, paragraphs: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h1 class="card-title text-2xl">{title}</h1>
                    {paragraphs
                        .iter()
                        .map(|p| view! { <p class="text-base-content/80">{*p}</p> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <StaticArticle title="Về HUSTBuy" paragraphs=ABOUT_PARAGRAPHS /> }
}

#[component]
pub fn CareersPage() -> impl IntoView {
    view! { <StaticArticle title="Tuyển dụng" paragraphs=CAREERS_PARAGRAPHS /> }
}

#[component]
pub fn ShippingPolicyPage() -> impl IntoView {
    view! { <StaticArticle title="Chính sách vận chuyển" paragraphs=SHIPPING_PARAGRAPHS /> }
}

#[component]
pub fn ReturnsPolicyPage() -> impl IntoView {
    view! { <StaticArticle title="Chính sách đổi trả" paragraphs=RETURNS_PARAGRAPHS /> }
}

#[component]
pub fn WarrantyPolicyPage() -> impl IntoView {
    view! { <StaticArticle title="Chính sách bảo hành" paragraphs=WARRANTY_PARAGRAPHS /> }
}

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h1 class="card-title text-2xl">"Câu hỏi thường gặp"</h1>
                    {FAQ_ENTRIES
                        .iter()
                        .map(|(question, answer)| {
                            view! {
                                <div class="collapse collapse-arrow bg-base-200">
                                    <input type="radio" name="faq" />
                                    <div class="collapse-title font-medium">{*question}</div>
                                    <div class="collapse-content text-sm text-base-content/80">
                                        <p>{*answer}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let toast = use_toast();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || message.get().trim().is_empty() {
            toast.error("Vui lòng điền đầy đủ thông tin");
            return;
        }
        if !is_valid_email(&email.get()) {
            toast.error("Email không hợp lệ");
            return;
        }
        // There is no contact endpoint; acknowledge and reset.
        toast.success("Đã ghi nhận liên hệ của bạn, chúng tôi sẽ phản hồi sớm");
        set_name.set(String::new());
        set_email.set(String::new());
        set_message.set(String::new());
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h1 class="card-title text-2xl">"Liên hệ"</h1>
                    <p class="text-base-content/70">
                        "Hotline: 1900 9999 · Email: hotro@hustbuy.vn · \
                         Số 1 Đại Cồ Việt, Hai Bà Trưng, Hà Nội"
                    </p>
                    <form class="space-y-4 mt-2" on:submit=on_submit>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="contact_name">
                                    <span class="label-text">"Họ tên"</span>
                                </label>
                                <input id="contact_name" type="text" class="input input-bordered"
                                    prop:value=name
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="contact_email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input id="contact_email" type="email" class="input input-bordered"
                                    prop:value=email
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                        </div>
                        <div class="form-control">
                            <label class="label" for="contact_message">
                                <span class="label-text">"Nội dung"</span>
                            </label>
                            <textarea id="contact_message" class="textarea textarea-bordered" rows="4"
                                prop:value=message
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                                required
                            ></textarea>
                        </div>
                        <button class="btn btn-primary">"Gửi liên hệ"</button>
                    </form>
                </div>
            </div>
        </div>
    }
}
