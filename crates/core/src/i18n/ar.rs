//! Arabic dictionary.

pub(super) static ENTRIES: &[(&str, &str)] = &[
    ("home", "الرئيسية"),
    ("coffeeMachines", "آلات القهوة"),
    ("accessories", "الإكسسوارات"),
    ("aboutUs", "من نحن"),
    ("contact", "اتصل بنا"),
    ("admin", "الإدارة"),
    ("slushMachines", "آلات السلاش"),
    ("coffeeGrinder", "مطاحن القهوة"),
    ("othersMachines", "آلات أخرى"),
    ("spareParts", "قطع الغيار"),
    ("professionalEspresso", "آلات إسبريسو احترافية"),
    ("vendingMachines", "آلات البيع"),
    ("homeOfficeMachines", "آلات المنزل والمكتب"),
    ("elmec", "إلميك"),
    ("spm", "إس بي إم"),
    ("espressoCoffeeGrinder", "مطحنة قهوة إسبريسو"),
    ("fineCoffeeGrinder", "مطحنة قهوة ناعمة"),
    ("blendersMachines", "آلات الخلاط"),
    ("coolingMachines", "آلات التبريد"),
    ("othersMachinesCategory", "آلات أخرى"),
    ("sparePartsCoffeeMachines", "قطع غيار آلات القهوة"),
    ("sparePartsSlushMachines", "قطع غيار آلات السلاش"),
    ("sparePartsCoffeeGrinder", "قطع غيار مطاحن القهوة"),
    ("shopNow", "تسوق الآن"),
    ("explore", "استكشف"),
    ("discover", "اكتشف"),
    ("premiumQuality", "جودة فاخرة"),
    ("premiumQualityDesc", "آلات من الدرجة الأولى من العلامات التجارية الرائدة"),
    ("expertSelection", "اختيار خبراء"),
    ("expertSelectionDesc", "منتقاة بعناية للتميز"),
    ("support247", "دعم على مدار الساعة"),
    ("support247Desc", "دائماً هنا لمساعدتك"),
    ("fastDelivery", "توصيل سريع"),
    ("fastDeliveryDesc", "شحن سريع وموثوق"),
    ("featuredProducts", "منتجات مميزة"),
    ("featuredProductsDesc", "اكتشف مجموعتنا المختارة من آلات القهوة والإكسسوارات الفاخرة"),
    ("viewAllProducts", "عرض جميع المنتجات"),
    ("viewDetails", "عرض التفاصيل"),
    ("allMachines", "جميع الآلات"),
    ("allAccessories", "جميع الإكسسوارات"),
    ("browseCollection", "تصفح مجموعتنا الكاملة"),
    ("completeSetup", "أكمل إعدادك"),
    ("coffeeMachinesDesc", "استكشف مجموعتنا الفاخرة من آلات الإسبريسو والقهوة الاحترافية"),
    ("accessoriesDesc", "أكمل إعداد القهوة الخاص بك مع مجموعتنا من الإكسسوارات وقطع الغيار الفاخرة"),
    ("noProducts", "لم يتم العثور على منتجات"),
    ("readyToElevate", "هل أنت مستعد لتحسين تجربة القهوة الخاصة بك؟"),
    ("readyToElevateDesc", "استكشف مجموعتنا الكاملة من آلات القهوة والإكسسوارات الاحترافية"),
    ("shopMachines", "تسوق الآلات"),
    ("contactUs", "اتصل بنا"),
    ("footerTagline", "شركة حارتنا - شريكك الموثوق لآلات الإسبريسو والقهوة الفاخرة. الجودة والموثوقية والتميز في كل كوب."),
    ("quickLinks", "روابط سريعة"),
    ("contactInfo", "اتصل بنا"),
    ("followUs", "تابعنا"),
    ("allRightsReserved", "جميع الحقوق محفوظة."),
    ("phone", "هاتف: ٠٠٩٦٣٤١٢٥٥٤٨٩٩"),
    ("mobile", "موبايل: ٠٠٩٦٣٩٩٢٧٦٦٢٠٠"),
    ("fax", "فاكس: ٠٠٩٦٣٤١٢٥٥٠٦٩٩"),
    ("addressFooter", "سوريا - اللاذقية - الصليبة شارع بور سعيد"),
    ("aboutTitle", "عن شركة حارتنا"),
    ("aboutSubtitle", "شريكك الموثوق في حلول آلات الإسبريسو والقهوة الفاخرة. نقدم التميز والجودة والشغف في كل كوب."),
    ("ourStory", "قصتنا"),
    ("ourValues", "قيمنا"),
    ("qualityFirst", "الجودة أولاً"),
    ("qualityFirstDesc", "لا نتنازل أبداً عن جودة منتجاتنا"),
    ("customerFocus", "التركيز على العملاء"),
    ("customerFocusDesc", "رضاك هو أولويتنا القصوى"),
    ("excellence", "التميز"),
    ("excellenceDesc", "نسعى للكمال في كل ما نقوم به"),
    ("passion", "الشغف"),
    ("passionDesc", "مدفوعون بحبنا للقهوة الرائعة"),
    ("whyChoose", "لماذا تختار شركة حارتنا؟"),
    ("aboutStory1", "تأسست بشغف القهوة المميزة، وقد خدمت حارتنا عشاق القهوة والشركات لأكثر من عقد من الزمان."),
    ("aboutStory2", "مهمتنا هي جعل آلات الإسبريسو الاحترافية في متناول كل من يقدر القهوة الجيدة."),
    ("aboutStory3", "من محبي القهوة في المنزل إلى المقاهي التجارية، نقدم آلات عالية الجودة ودعم مستمر للجميع."),
    ("aboutWhy1", "بخبرة سنوات، يساعدك خبراؤنا في العثور على الجهاز المثالي لاحتياجاتك."),
    ("aboutWhy2", "نقدم دعمًا وصيانة متكاملة — عند اختيارك حارتنا، فإنك تكسب شريكًا في رحلتك مع القهوة."),
    ("contactTitle", "اتصل بنا"),
    ("contactSubtitle", "هل لديك أسئلة؟ نحب أن نسمع منك. أرسل لنا رسالة وسنرد في أقرب وقت ممكن."),
    ("sendMessage", "أرسل لنا رسالة"),
    ("getInTouch", "تواصل معنا"),
    ("firstName", "الاسم الأول"),
    ("lastName", "اسم العائلة"),
    ("email", "البريد الإلكتروني"),
    ("subject", "الموضوع"),
    ("message", "الرسالة"),
    ("businessHours", "ساعات العمل"),
    ("addToCart", "أضف إلى السلة"),
    ("freeShipping", "يوجد شحن"),
    ("freeShippingDesc", "للطلبات فوق 100 دولار"),
    ("warranty", "ضمان سنة واحدة"),
    ("warrantyDesc", "تغطية كاملة"),
    ("productDetails", "تفاصيل المنتج"),
    ("category", "الفئة"),
    ("type", "النوع"),
    ("sku", "رمز المنتج"),
    ("availability", "التوفر"),
    ("inStock", "متوفر"),
    ("relatedProducts", "منتجات ذات صلة"),
    ("backTo", "العودة إلى"),
    ("shoppingCart", "عربة التسوق"),
    ("productOrigin", "بلد المنشأ"),
    ("dashboard", "لوحة التحكم"),
    ("products", "المنتجات"),
    ("categories", "الفئات"),
    ("heroSlider", "شريط البطل"),
    ("settings", "الإعدادات"),
    ("backToWebsite", "العودة إلى الموقع"),
    ("welcomeAdmin", "مرحباً بك في لوحة إدارة شركة حارتنا"),
    ("totalProducts", "إجمالي المنتجات"),
    ("activeProducts", "المنتجات النشطة في الكتالوج"),
    ("productCategories", "فئات المنتجات"),
    ("activeSlides", "الشرائح النشطة"),
    ("catalogValue", "قيمة الكتالوج"),
    ("totalInventory", "إجمالي قيمة المخزون"),
    ("recentProducts", "المنتجات الأخيرة"),
    ("manageProducts", "إدارة كتالوج المنتجات"),
    ("addProduct", "إضافة منتج"),
    ("searchProducts", "البحث عن المنتجات..."),
    ("manageCategories", "إدارة فئات المنتجات والفئات الفرعية"),
    ("addCategory", "إضافة فئة"),
    ("addSubcategory", "إضافة فئة فرعية"),
    ("subcategories", "الفئات الفرعية"),
    ("manageHeroSlider", "إدارة محتوى شريط البطل الرئيسي"),
    ("addSlide", "إضافة شريحة"),
    ("slide", "شريحة"),
    ("cta", "دعوة للعمل"),
    ("manageSettings", "إدارة إعدادات الموقع والتكوين"),
    ("generalSettings", "الإعدادات العامة"),
    ("siteName", "اسم الموقع (الإنجليزية)"),
    ("siteNameAr", "اسم الموقع (العربية)"),
    ("tagline", "الشعار (الإنجليزية)"),
    ("taglineAr", "الشعار (العربية)"),
    ("contactInformation", "معلومات الاتصال"),
    ("phoneNumber", "رقم الهاتف"),
    ("emailAddress", "عنوان البريد الإلكتروني"),
    ("address", "العنوان"),
    ("socialMedia", "وسائل التواصل الاجتماعي"),
    ("facebookUrl", "رابط فيسبوك"),
    ("instagramUrl", "رابط إنستجرام"),
    ("twitterUrl", "رابط تويتر"),
    ("saveChanges", "حفظ التغييرات"),
    ("resetToDefaults", "إعادة تعيين إلى الافتراضي"),
    ("areYouSure", "هل أنت متأكد من رغبتك في حذف هذا المنتج؟"),
    ("edit", "تعديل"),
    ("delete", "حذف"),
    ("allCoffeeMachines", "جميع آلات القهوة"),
    ("allSlushMachines", "جميع آلات السلاش"),
    ("allCoffeeGrinders", "جميع مطاحن القهوة"),
    ("allOthersMachines", "جميع الآلات الأخرى"),
    ("allSpareParts", "جميع قطع الغيار"),
    ("send", "إرسال"),
    ("image", "الصورة"),
    ("name", "الاسم"),
    ("price", "السعر"),
    ("status", "الحالة"),
    ("actions", "الإجراءات"),
    ("featured", "مميز"),
    ("standard", "قياسي"),
    // Storefront and admin screens
    ("emptyCart", "سلة التسوق فارغة"),
    ("whatsapp", "واتساب"),
    ("needHelp", "هل تحتاج مساعدة في الاختيار؟"),
    ("needHelpDesc", "سيساعدك فريقنا في العثور على الآلة المناسبة."),
    ("shopNowDesc", "تصفح مجموعتنا الكاملة من الآلات والمطاحن والإكسسوارات"),
    ("browseSelection", "تصفح تشكيلتنا"),
    ("backToAll", "العودة إلى جميع المنتجات"),
    ("messages", "الرسائل"),
    ("manageMessages", "الرسائل المرسلة عبر نموذج الاتصال"),
    ("noMessages", "لا توجد رسائل بعد"),
    ("messageSent", "تم إرسال الرسالة"),
    ("messageSentDesc", "شكراً لك! سنتواصل معك قريباً."),
    ("messageFailed", "يرجى تعبئة جميع الحقول المطلوبة ببريد إلكتروني صحيح."),
    ("login", "تسجيل الدخول"),
    ("logout", "تسجيل الخروج"),
    ("password", "كلمة المرور"),
    ("invalidPassword", "كلمة المرور غير صحيحة"),
    ("search", "بحث"),
    ("theme", "المظهر"),
    ("light", "فاتح"),
    ("dark", "داكن"),
    ("system", "النظام"),
    ("language", "اللغة"),
    ("quantity", "الكمية"),
    ("remove", "إزالة"),
    ("noPurchasesOnline", "الشراء عبر الإنترنت غير متاح. تواصل معنا للطلب."),
    ("callUs", "اتصل بنا"),
    ("cancel", "إلغاء"),
    ("update", "تحديث"),
    ("save", "حفظ"),
    ("newProduct", "منتج جديد"),
    ("editProduct", "تعديل المنتج"),
    ("editSlide", "تعديل الشريحة"),
    ("editCategory", "تعديل الفئة"),
    ("link", "الرابط"),
    ("required", "مطلوب"),
    ("description", "الوصف"),
    ("nameAr", "الاسم (العربية)"),
    ("descriptionAr", "الوصف (العربية)"),
    ("productOriginAr", "بلد المنشأ (العربية)"),
    ("subcategory", "الفئة الفرعية"),
    ("none", "لا شيء"),
    ("imageUrl", "رابط الصورة"),
    ("uploadImage", "رفع صورة"),
    ("title", "العنوان"),
    ("titleAr", "العنوان (العربية)"),
    ("subtitle", "العنوان الفرعي"),
    ("subtitleAr", "العنوان الفرعي (العربية)"),
    ("ctaAr", "دعوة للعمل (العربية)"),
    ("received", "تاريخ الاستلام"),
    ("from", "من"),
    ("notAvailable", "غير متوفر"),
    ("pageNotFound", "الصفحة غير موجودة"),
    ("somethingWentWrong", "حدث خطأ ما"),
    ("savedSuccessfully", "تم الحفظ بنجاح"),
    ("deletedSuccessfully", "تم الحذف بنجاح"),
    ("confirmDelete", "هل أنت متأكد من رغبتك في حذف هذا العنصر؟"),
    ("phoneOptional", "الهاتف (اختياري)"),
    ("cart", "السلة"),
    ("total", "إجمالي العناصر"),
    ("orderByPhone", "لإتمام طلبك، تواصل معنا"),
    ("continueShopping", "متابعة التسوق"),
];
