//! English dictionary.

pub(super) static ENTRIES: &[(&str, &str)] = &[
    ("home", "Home"),
    ("coffeeMachines", "Coffee Machines"),
    ("accessories", "Accessories"),
    ("aboutUs", "About Us"),
    ("contact", "Contact"),
    ("admin", "Admin"),
    ("slushMachines", "Slush Machines"),
    ("coffeeGrinder", "Coffee Grinder"),
    ("othersMachines", "Others Machines"),
    ("spareParts", "Spare Parts"),
    ("professionalEspresso", "Professional Espresso Machines"),
    ("vendingMachines", "Vending Machines"),
    ("homeOfficeMachines", "Home-Office Machines"),
    ("elmec", "ELMEC"),
    ("spm", "SPM"),
    ("espressoCoffeeGrinder", "Espresso Coffee Grinder"),
    ("fineCoffeeGrinder", "Fine Coffee Grinder"),
    ("blendersMachines", "Blenders Machines"),
    ("coolingMachines", "Cooling Machines"),
    ("othersMachinesCategory", "Others Machines"),
    ("sparePartsCoffeeMachines", "Spare Parts Coffee Machines"),
    ("sparePartsSlushMachines", "Spare Parts Slush Machines"),
    ("sparePartsCoffeeGrinder", "Spare Parts Coffee Grinder"),
    ("shopNow", "Shop Now"),
    ("explore", "Explore"),
    ("discover", "Discover"),
    ("premiumQuality", "Premium Quality"),
    ("premiumQualityDesc", "Top-tier machines from leading brands"),
    ("expertSelection", "Expert Selection"),
    ("expertSelectionDesc", "Carefully curated for excellence"),
    ("support247", "24/7 Support"),
    ("support247Desc", "Always here to help you"),
    ("fastDelivery", "Fast Delivery"),
    ("fastDeliveryDesc", "Quick and reliable shipping"),
    ("featuredProducts", "Featured Products"),
    ("featuredProductsDesc", "Discover our handpicked selection of premium coffee machines and accessories"),
    ("viewAllProducts", "View All Products"),
    ("viewDetails", "View Details"),
    ("allMachines", "All Machines"),
    ("allAccessories", "All Accessories"),
    ("browseCollection", "Browse our complete collection"),
    ("completeSetup", "Complete your setup"),
    ("coffeeMachinesDesc", "Explore our premium collection of professional espresso and coffee machines"),
    ("accessoriesDesc", "Complete your coffee setup with our range of premium accessories and spare parts"),
    ("noProducts", "No products found"),
    ("readyToElevate", "Ready to Elevate Your Coffee Experience?"),
    ("readyToElevateDesc", "Explore our complete range of professional coffee machines and accessories"),
    ("shopMachines", "Shop Machines"),
    ("contactUs", "Contact Us"),
    ("footerTagline", "Hartna Company - Your trusted partner for premium espresso and coffee machines. Quality, reliability, and excellence in every cup."),
    ("quickLinks", "Quick Links"),
    ("contactInfo", "Contact Us"),
    ("followUs", "Follow Us"),
    ("allRightsReserved", "All rights reserved."),
    ("phone", "Phone: 00963412554899"),
    ("mobile", "Mobile: 00963992766200"),
    ("fax", "Fax: 00963412550699"),
    ("addressFooter", "Syria - Lattakia - Salibah, Port Said Street"),
    ("aboutTitle", "About Hartna Company"),
    ("aboutSubtitle", "Your trusted partner in premium espresso and coffee machine solutions. We bring excellence, quality, and passion to every cup."),
    ("ourStory", "Our Story"),
    ("ourValues", "Our Values"),
    ("qualityFirst", "Quality First"),
    ("qualityFirstDesc", "We never compromise on the quality of our products"),
    ("customerFocus", "Customer Focus"),
    ("customerFocusDesc", "Your satisfaction is our top priority"),
    ("excellence", "Excellence"),
    ("excellenceDesc", "Striving for perfection in everything we do"),
    ("passion", "Passion"),
    ("passionDesc", "Driven by our love for great coffee"),
    ("whyChoose", "Why Choose Hartna Company?"),
    ("aboutStory1", "Founded with a passion for exceptional coffee, Hartna has been serving coffee enthusiasts and businesses for over a decade."),
    ("aboutStory2", "Our mission is to make professional-grade espresso machines accessible to everyone who appreciates quality coffee."),
    ("aboutStory3", "From home baristas to commercial cafes, we provide high-quality machines and support for every coffee lover."),
    ("aboutWhy1", "With years of experience, our experts help you find the perfect equipment for your needs."),
    ("aboutWhy2", "We provide full support and maintenance — when you choose Hartna, you gain a coffee partner."),
    ("contactTitle", "Contact Us"),
    ("contactSubtitle", "Have questions? We'd love to hear from you. Send us a message and we'll respond as soon as possible."),
    ("sendMessage", "Send us a Message"),
    ("getInTouch", "Get in Touch"),
    ("firstName", "First Name"),
    ("lastName", "Last Name"),
    ("email", "Email"),
    ("subject", "Subject"),
    ("message", "Message"),
    ("businessHours", "Business Hours"),
    ("addToCart", "Add to Cart"),
    ("freeShipping", "Free Shipping"),
    ("freeShippingDesc", "On orders over $100"),
    ("warranty", "1 Year Warranty"),
    ("warrantyDesc", "Full coverage"),
    ("productDetails", "Product Details"),
    ("category", "Category"),
    ("type", "Type"),
    ("sku", "SKU"),
    ("availability", "Availability"),
    ("inStock", "In Stock"),
    ("relatedProducts", "Related Products"),
    ("backTo", "Back to"),
    ("shoppingCart", "Shopping Cart"),
    ("productOrigin", "Product Origin"),
    ("dashboard", "Dashboard"),
    ("products", "Products"),
    ("categories", "Categories"),
    ("heroSlider", "Hero Slider"),
    ("settings", "Settings"),
    ("backToWebsite", "Back to Website"),
    ("welcomeAdmin", "Welcome to Hartna Company Admin Panel"),
    ("totalProducts", "Total Products"),
    ("activeProducts", "Active products in catalog"),
    ("productCategories", "Product categories"),
    ("activeSlides", "Active hero slides"),
    ("catalogValue", "Catalog Value"),
    ("totalInventory", "Total inventory value"),
    ("recentProducts", "Recent Products"),
    ("manageProducts", "Manage your product catalog"),
    ("addProduct", "Add Product"),
    ("searchProducts", "Search products..."),
    ("image", "Image"),
    ("name", "Name"),
    ("price", "Price"),
    ("status", "Status"),
    ("actions", "Actions"),
    ("featured", "Featured"),
    ("standard", "Standard"),
    ("manageCategories", "Manage product categories and subcategories"),
    ("addCategory", "Add Category"),
    ("addSubcategory", "Add Subcategory"),
    ("subcategories", "Subcategories"),
    ("manageHeroSlider", "Manage homepage hero slider content"),
    ("addSlide", "Add Slide"),
    ("slide", "Slide"),
    ("cta", "CTA"),
    ("manageSettings", "Manage your website settings and configuration"),
    ("generalSettings", "General Settings"),
    ("siteName", "Site Name (English)"),
    ("siteNameAr", "Site Name (Arabic)"),
    ("tagline", "Tagline (English)"),
    ("taglineAr", "Tagline (Arabic)"),
    ("contactInformation", "Contact Information"),
    ("phoneNumber", "Phone Number"),
    ("emailAddress", "Email Address"),
    ("address", "Address"),
    ("socialMedia", "Social Media"),
    ("facebookUrl", "Facebook URL"),
    ("instagramUrl", "Instagram URL"),
    ("twitterUrl", "Twitter URL"),
    ("saveChanges", "Save Changes"),
    ("resetToDefaults", "Reset to Defaults"),
    ("areYouSure", "Are you sure you want to delete this product?"),
    ("edit", "Edit"),
    ("delete", "Delete"),
    ("allCoffeeMachines", "All Coffee Machines"),
    ("allSlushMachines", "All Slush Machines"),
    ("allCoffeeGrinders", "All Coffee Grinders"),
    ("allOthersMachines", "All Others Machines"),
    ("allSpareParts", "All Spare Parts"),
    ("send", "Send"),
    // Storefront and admin screens
    ("emptyCart", "Your cart is empty"),
    ("whatsapp", "WhatsApp"),
    ("needHelp", "Need help choosing?"),
    ("needHelpDesc", "Our team will help you find the right machine."),
    ("shopNowDesc", "Browse our full range of machines, grinders and accessories"),
    ("browseSelection", "Browse our selection"),
    ("backToAll", "Back to all products"),
    ("messages", "Messages"),
    ("manageMessages", "Messages sent through the contact form"),
    ("noMessages", "No messages yet"),
    ("messageSent", "Message sent"),
    ("messageSentDesc", "Thank you! We'll get back to you soon."),
    ("messageFailed", "Please fill in all required fields with a valid email."),
    ("login", "Log in"),
    ("logout", "Log out"),
    ("password", "Password"),
    ("invalidPassword", "Invalid password"),
    ("search", "Search"),
    ("theme", "Theme"),
    ("light", "Light"),
    ("dark", "Dark"),
    ("system", "System"),
    ("language", "Language"),
    ("quantity", "Quantity"),
    ("remove", "Remove"),
    ("noPurchasesOnline", "Online purchases are not available. Contact us to order."),
    ("callUs", "Call us"),
    ("cancel", "Cancel"),
    ("update", "Update"),
    ("save", "Save"),
    ("newProduct", "New Product"),
    ("editProduct", "Edit Product"),
    ("editSlide", "Edit Slide"),
    ("editCategory", "Edit Category"),
    ("link", "Link"),
    ("required", "Required"),
    ("description", "Description"),
    ("nameAr", "Name (Arabic)"),
    ("descriptionAr", "Description (Arabic)"),
    ("productOriginAr", "Product Origin (Arabic)"),
    ("subcategory", "Subcategory"),
    ("none", "None"),
    ("imageUrl", "Image URL"),
    ("uploadImage", "Upload Image"),
    ("title", "Title"),
    ("titleAr", "Title (Arabic)"),
    ("subtitle", "Subtitle"),
    ("subtitleAr", "Subtitle (Arabic)"),
    ("ctaAr", "CTA (Arabic)"),
    ("received", "Received"),
    ("from", "From"),
    ("notAvailable", "N/A"),
    ("pageNotFound", "Page not found"),
    ("somethingWentWrong", "Something went wrong"),
    ("savedSuccessfully", "Saved successfully"),
    ("deletedSuccessfully", "Deleted successfully"),
    ("confirmDelete", "Are you sure you want to delete this item?"),
    ("phoneOptional", "Phone (optional)"),
    ("cart", "Cart"),
    ("total", "Total items"),
    ("orderByPhone", "To complete your order, contact us"),
    ("continueShopping", "Continue Shopping"),
];
