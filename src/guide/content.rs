//! The literal text of the architecture guide.

use super::{Annotation, Block, Pair, Section};
use crate::ooxml::docx::RgbColor;

pub const TITLE: &str = "Spring Boot E-Commerce Backend";
pub const SUBTITLE: &str = "Complete Architecture Guide";

pub const TOC_ENTRIES: &[&str] = &[
    "1. Overview",
    "2. Architecture & Flow",
    "3. Technology Stack",
    "4. How Components Connect",
    "5. Key Annotations Explained",
    "6. Database & ORM Concepts",
    "7. API Endpoints",
    "8. Request-Response Lifecycle",
];

/// Header row first.
pub const ENDPOINTS: &[[&str; 2]] = &[
    ["HTTP Method & Path", "Purpose"],
    ["GET /api/products", "Get all products"],
    ["GET /api/product/{id}", "Get single product by ID"],
    ["POST /api/product", "Add new product with image"],
    ["GET /api/product/{productId}/image", "Download product image"],
];

pub const SECTIONS: &[Section] = &[
    Section {
        title: "Table of Contents",
        blocks: &[Block::Bullets(TOC_ENTRIES)],
    },
    Section {
        title: "1. Overview",
        blocks: OVERVIEW,
    },
    Section {
        title: "2. Architecture & Flow",
        blocks: ARCHITECTURE,
    },
    Section {
        title: "3. Technology Stack",
        blocks: &[
            Block::Heading(2, "Dependencies (from pom.xml):"),
            Block::Terms(DEPENDENCIES),
        ],
    },
    Section {
        title: "4. How Components Connect",
        blocks: &[
            Block::Heading(2, "Example 1: GET /api/products Request Flow"),
            Block::Flow(GET_PRODUCTS_FLOW),
            Block::Blank,
            Block::Heading(2, "Example 2: POST /api/product Request Flow (with Image Upload)"),
            Block::Flow(ADD_PRODUCT_FLOW),
        ],
    },
    Section {
        title: "5. Key Annotations Explained",
        blocks: &[
            Block::Heading(2, "Controller Annotations"),
            Block::Annotations(CONTROLLER_ANNOTATIONS),
            Block::Heading(2, "Entity/Model Annotations"),
            Block::Definitions(ENTITY_ANNOTATIONS),
            Block::Heading(2, "Service Annotations"),
            Block::Definitions(SERVICE_ANNOTATIONS),
            Block::Heading(2, "Repository Annotations"),
            Block::Heading(3, "@Repository"),
            Block::Text(
                r#"Tells Spring: "This is a data access object". Enables automatic SQL generation. <Product, Integer> = Entity type, Primary Key type."#,
            ),
        ],
    },
    Section {
        title: "6. Database & ORM Concepts",
        blocks: DATABASE,
    },
    Section {
        title: "7. API Endpoints",
        blocks: API_ENDPOINTS,
    },
    Section {
        title: "8. Request-Response Lifecycle",
        blocks: &[
            Block::Heading(2, "Complete Lifecycle Example: Create Product with Image"),
            Block::Milestones(LIFECYCLE),
        ],
    },
    Section {
        title: "Summary: How Everything Works Together",
        blocks: &[
            Block::Heading(2, "Request Path (What happens when you call an API):"),
            Block::Bullets(REQUEST_PATH),
            Block::Heading(2, "Key Concepts Recap:"),
            Block::Recap(CONCEPTS),
        ],
    },
    Section {
        title: "Next Steps for Learning",
        blocks: &[
            Block::Text(
                "Now that you understand the architecture, you can enhance your project by implementing:",
            ),
            Block::Numbered(NEXT_STEPS),
            Block::Callout(
                "Your project is now ready for these enhancements!",
                RgbColor(0, 102, 0),
            ),
        ],
    },
];

const DOWN: Block = Block::Bullets(&["↓"]);

const OVERVIEW: &[Block] = &[
    Block::Text(
        "Your project is a REST API backend for an e-commerce application that allows users to:",
    ),
    Block::Bullets(&[
        "View all products",
        "View a single product",
        "Upload products with images",
        "Retrieve product images",
    ]),
    Block::Blank,
    Block::Text("The architecture follows the Layered/Tier Architecture pattern:"),
    Block::Bold("Client (Browser/Mobile App)\n"),
    DOWN,
    Block::Lead("Controller Layer", " ← Handles HTTP requests/responses"),
    DOWN,
    Block::Lead("Service Layer", " ← Business logic"),
    DOWN,
    Block::Lead("Repository Layer", " ← Database access"),
    DOWN,
    Block::Lead("Database (H2)", " ← Data storage"),
];

const ARCHITECTURE: &[Block] = &[
    Block::Heading(2, "Layer 1: Controller Layer (ProductController.java)"),
    Block::Heading(3, "Purpose:"),
    Block::Text("Handle incoming HTTP requests and send responses back to clients."),
    Block::Heading(3, "How it works:"),
    Block::Bullets(&[
        "Receives HTTP requests (GET, POST, etc.)",
        "Parses request data (path variables, request body, file uploads)",
        "Calls business logic from the Service layer",
        "Sends HTTP responses back (JSON, images, etc.)",
        "Handles HTTP status codes (200 OK, 201 CREATED, 404 NOT FOUND, 500 ERROR)",
    ]),
    Block::Heading(3, "Your Controllers:"),
    Block::Table(ENDPOINTS),
    Block::Blank,
    Block::Heading(2, "Layer 2: Service Layer (ProductService.java)"),
    Block::Heading(3, "Purpose:"),
    Block::Text("Contains business logic, data validation, and orchestration."),
    Block::Heading(3, "How it works:"),
    Block::Bullets(&[
        "Receives data from the Controller",
        "Processes the business logic (e.g., converting image file to bytes)",
        "Validates data before saving",
        "Calls the Repository to access the database",
        "Returns processed data back to the Controller",
    ]),
    Block::Heading(3, "Your Service Methods:"),
    Block::Bullets(&[
        "getAllProducts() → Retrieves all products from database",
        "getProductById(int id) → Retrieves a specific product",
        "addProduct(product, file) → Saves product + converts image to binary",
    ]),
    Block::Heading(2, "Layer 3: Repository Layer (ProductRepo.java)"),
    Block::Heading(3, "Purpose:"),
    Block::Text("Database access abstraction. Uses Spring Data JPA."),
    Block::Heading(3, "How it works:"),
    Block::Bullets(&[
        "Extends JpaRepository<Product, Integer>",
        "Provides pre-built methods: findAll(), findById(), save(), delete(), etc.",
        "No need to write SQL queries for basic CRUD operations",
        "Spring automatically generates database queries",
    ]),
    Block::Heading(3, "What JpaRepository provides (out of the box):"),
    Block::Bullets(&[
        "save(entity) → INSERT or UPDATE",
        "findAll() → SELECT *",
        "findById(id) → SELECT WHERE id = ?",
        "delete(entity) → DELETE",
        "count() → COUNT(*)",
        "... and many more",
    ]),
    Block::Heading(2, "Layer 4: Model/Entity Layer (Product.java)"),
    Block::Heading(3, "Purpose:"),
    Block::Text("Defines the database table structure as a Java class."),
    Block::Heading(3, "How it works:"),
    Block::Bullets(&[
        "Each class with @Entity annotation = one database table",
        "Each field with @Id = primary key",
        "Each private field = one database column",
        "JPA/Hibernate automatically creates/updates the table",
    ]),
    Block::Heading(2, "Layer 5: Database (H2 In-Memory)"),
    Block::Heading(3, "Purpose:"),
    Block::Text("Stores all data persistently (during runtime)."),
    Block::Heading(3, "Current Setup:"),
    Block::Bullets(&[
        "H2 embedded database (in-memory)",
        "URL: jdbc:h2:mem:ecomdb",
        "Automatically creates tables when application starts",
        "Data is lost when application stops",
    ]),
];

const DEPENDENCIES: &[Pair] = &[
    (
        "spring-boot-starter-data-jpa",
        "Provides JPA (Java Persistence API) interface. Enables Hibernate ORM (Object-Relational Mapping). Converts Java objects to database records.",
    ),
    (
        "spring-boot-starter-web",
        "Provides REST API capabilities. Includes embedded Tomcat server. Handles HTTP requests/responses. Makes your application a web server.",
    ),
    (
        "spring-boot-devtools",
        "Auto-restarts application when files change. Faster development cycle.",
    ),
    (
        "h2 (H2 Database)",
        "Lightweight, in-memory database. Good for learning and testing. Stores your product data.",
    ),
    (
        "lombok",
        "Reduces boilerplate Java code. Auto-generates getters, setters, constructors. Annotations: @Data, @AllArgsConstructor, @NoArgsConstructor",
    ),
];

const GET_PRODUCTS_FLOW: &[Pair] = &[
    ("CLIENT sends", "GET http://localhost:8080/api/products"),
    ("TOMCAT SERVLET", "embedded web server receives request"),
    ("SPRING DISPATCHER", r#"detects @GetMapping("/products")"#),
    ("CONTROLLER", "executes: getAllProducts()"),
    ("SERVICE", "executes: getAllProducts() → calls repo.findAll()"),
    ("REPOSITORY", "generates SQL: SELECT * FROM product"),
    ("DATABASE (H2)", "returns: List of all Product records"),
    ("REPOSITORY", "converts SQL results → List<Product> objects"),
    ("SERVICE", "returns this List to Controller"),
    ("CONTROLLER", "wraps in ResponseEntity with HTTP 200 OK"),
    ("SPRING JACKSON", "converts List<Product> → JSON"),
    ("CLIENT", "receives JSON response with all products"),
];

const ADD_PRODUCT_FLOW: &[Pair] = &[
    (
        "CLIENT sends",
        "POST http://localhost:8080/api/product with FormData (product + imageFile)",
    ),
    ("SPRING MULTIPART HANDLER", "parses the FormData"),
    ("CONTROLLER", "executes: addProduct(Product, MultipartFile)"),
    ("SERVICE", "extracts image metadata (filename, content-type, bytes)"),
    ("SERVICE", "sets image data on Product object"),
    ("SERVICE", "calls repo.save(product)"),
    ("REPOSITORY", "generates SQL: INSERT INTO product (...)"),
    ("DATABASE", "stores the Product record and auto-generates ID"),
    ("REPOSITORY", "returns saved Product object with ID"),
    ("SERVICE", "returns Product to Controller"),
    ("CONTROLLER", "returns ResponseEntity with HTTP 201 CREATED"),
    ("JACKSON", "converts Product to JSON (imageData excluded by @JsonIgnore)"),
    ("CLIENT", "receives HTTP 201 with created product data"),
];

const CONTROLLER_ANNOTATIONS: &[Annotation] = &[
    Annotation {
        name: "@RestController",
        code: "@RestController\npublic class ProductController { ... }",
        explanation: r#"Tells Spring: "This class handles REST API requests". Every method returns JSON/data automatically (not HTML templates). Combines @Controller + @ResponseBody"#,
    },
    Annotation {
        name: r#"@RequestMapping("/api")"#,
        code: "@RequestMapping(\"/api\")\npublic class ProductController { ... }",
        explanation: "Base URL prefix for all endpoints in this controller. All endpoints start with /api/. Example: Full URL becomes /api/products",
    },
    Annotation {
        name: "@CrossOrigin",
        code: "@CrossOrigin\npublic class ProductController { ... }",
        explanation: "Allows requests from different domains/ports. Without this: Frontend on port 3000 cannot call backend on port 8080. CORS = Cross-Origin Resource Sharing",
    },
    Annotation {
        name: r#"@GetMapping("/products")"#,
        code: "@GetMapping(\"/products\")\npublic ResponseEntity<List<Product>> getAllProducts() { ... }",
        explanation: "Maps HTTP GET requests to /api/products to this method. Similar: @PostMapping, @PutMapping, @DeleteMapping",
    },
    Annotation {
        name: r#"@PostMapping(value = "/product", consumes = {"multipart/form-data"})"#,
        code: "@PostMapping(value = \"/product\", consumes = {\"multipart/form-data\"})\npublic ResponseEntity<?> addProduct(...) { ... }",
        explanation: r#"Maps HTTP POST requests to /api/product. consumes = {"multipart/form-data"} means: Accept file uploads (FormData). Without this: Cannot accept image files"#,
    },
    Annotation {
        name: "@PathVariable",
        code: "@GetMapping(\"/product/{id}\")\npublic ResponseEntity<Product> getProduct(@PathVariable int id) { ... }",
        explanation: "Extracts URL parameter {id} as a Java variable. Example: /product/5 → id = 5",
    },
    Annotation {
        name: "@RequestPart",
        code: "@PostMapping(\"/product\")\npublic ResponseEntity<?> addProduct(\n    @RequestPart Product product,\n    @RequestPart MultipartFile imageFile\n) { ... }",
        explanation: r#"Extracts named form fields from multipart request. @RequestPart Product → Extract form field named "product". @RequestPart MultipartFile → Extract file upload named "imageFile""#,
    },
];

const ENTITY_ANNOTATIONS: &[Pair] = &[
    (
        "@Entity",
        r#"Tells JPA: "This class represents a database table". Table name = class name (lowercase by default). Product class → product table"#,
    ),
    (
        "@Id",
        "Marks this field as PRIMARY KEY. Must be unique for each record. Used to uniquely identify a product.",
    ),
    (
        "@GeneratedValue(strategy = GenerationType.IDENTITY)",
        "Auto-generates ID value when new product is inserted. IDENTITY = Database auto-increment (incrementing numbers). You don't set ID manually; database does it.",
    ),
    (
        "@Lob (Large Object)",
        "Tells JPA: This field stores large binary data. byte[] = array of bytes (binary image data). Stores in BLOB column in database.",
    ),
    (
        "@Basic(fetch = FetchType.LAZY)",
        "LAZY = Don't load this field by default. When you fetch a Product, imageData is NOT loaded (saves memory/bandwidth). Load imageData only when explicitly accessed. Good for large binary data.",
    ),
    (
        "@JsonIgnore",
        "When converting Product to JSON: skip this field. Why: Don't send huge binary data in API response. Instead: Provide separate /image endpoint to download.",
    ),
    (
        "@JsonIgnoreProperties",
        "Ignores Hibernate proxy fields when serializing to JSON. Prevents JSON serialization errors.",
    ),
    (
        "@Data (Lombok)",
        "Auto-generates: getters, setters, toString(), equals(), hashCode(). Reduces boilerplate code. Combines: @Getter + @Setter + @ToString + @EqualsAndHashCode",
    ),
    (
        "@AllArgsConstructor (Lombok)",
        "Auto-generates constructor with all fields as parameters. Example: new Product(id, name, brand, price, ...)",
    ),
    (
        "@NoArgsConstructor (Lombok)",
        "Auto-generates empty constructor. Example: new Product()",
    ),
];

const SERVICE_ANNOTATIONS: &[Pair] = &[
    (
        "@Service",
        r#"Tells Spring: "This is a service class (business logic)". Spring automatically creates an instance (bean) of this class. Can be injected into other classes."#,
    ),
    (
        "@Autowired",
        r#"Tells Spring: "Automatically inject an instance of ProductService". Dependency Injection: Spring finds and provides the object. Don't use new ProductService() manually."#,
    ),
];

const CREATE_TABLE: &str = "CREATE TABLE product (
    id              INT PRIMARY KEY AUTO_INCREMENT,
    name            VARCHAR(255),
    desc            VARCHAR(255),
    brand           VARCHAR(255),
    price           DECIMAL(19,2),
    category        VARCHAR(255),
    release_date    TIMESTAMP,
    available       BOOLEAN,
    quantity        INT,
    image_name      VARCHAR(255),
    image_type      VARCHAR(255),
    image_data      BLOB
);";

const DATABASE: &[Block] = &[
    Block::Heading(2, "What is ORM (Object-Relational Mapping)?"),
    Block::Text("ORM bridges Java objects and database tables:"),
    Block::Blank,
    Block::Bullets(&[
        "Product class ↔ product table",
        "Product object ↔ product row",
        "id field ↔ id column",
        "name field ↔ name column",
        "imageData field ↔ image_data column",
    ]),
    Block::Heading(3, "Benefits:"),
    Block::Bullets(&[
        "Write Java code instead of SQL queries",
        "Database agnostic (switch from H2 to MySQL easily)",
        "Automatic type conversion (Java types ↔ SQL types)",
    ]),
    Block::Heading(2, "What is Hibernate?"),
    Block::Text("Hibernate is the ORM framework that:"),
    Block::Numbered(&[
        "Generates SQL queries from your Java code",
        "Converts database records to Java objects",
        "Manages entity lifecycle (new, managed, detached, removed)",
        "Handles relationships between entities",
    ]),
    Block::Heading(3, "Example:"),
    Block::Text("Instead of writing:"),
    Block::CodeBullet("SELECT * FROM product WHERE id = 1;"),
    Block::Text("You write:"),
    Block::CodeBullet("Product product = repo.findById(1).orElse(null);"),
    Block::Text("Hibernate generates the SQL for you!"),
    Block::Heading(2, "JPA vs Hibernate:"),
    Block::Bullets(&[
        "JPA = Standard interface/specification (like a contract)",
        "Hibernate = Implementation of JPA (the actual implementation)",
        "Spring Data JPA = Wrapper around Hibernate that makes it even easier",
    ]),
    Block::Heading(2, "Database Table Structure (Auto-generated)"),
    Block::Text("Your Product class creates this table in H2:"),
    Block::CodeBullet(CREATE_TABLE),
    Block::Heading(3, "How:"),
    Block::Bullets(&[
        "spring.jpa.hibernate.ddl-auto=update tells Hibernate to automatically create/update tables",
        "Field names map to column names (camelCase → snake_case)",
    ]),
];

const API_ENDPOINTS: &[Block] = &[
    Block::Heading(2, "Endpoint 1: GET /api/products"),
    Block::Heading(3, "Purpose:"),
    Block::Text("Retrieve all products"),
    Block::Heading(3, "Request:"),
    Block::Code("GET /api/products HTTP/1.1\nHost: localhost:8080"),
    Block::Heading(3, "Response (HTTP 200 OK):"),
    Block::Text("Returns a JSON array of all products with their details (excluding imageData)"),
    Block::Heading(3, "Backend Flow:"),
    Block::Numbered(&[
        "Controller receives GET request",
        "Calls service.getAllProducts()",
        "Service calls repo.findAll()",
        "Repository generates: SELECT * FROM product",
        "Returns List<Product>",
        "Jackson converts to JSON",
        "Returns HTTP 200 OK with JSON body",
    ]),
    Block::Heading(2, "Endpoint 2: GET /api/product/{id}"),
    Block::Heading(3, "Purpose:"),
    Block::Text("Retrieve a single product by ID"),
    Block::Heading(3, "Request:"),
    Block::Code("GET /api/product/1 HTTP/1.1\nHost: localhost:8080"),
    Block::Heading(3, "Response:"),
    Block::Text("HTTP 200 OK: Returns the product as JSON"),
    Block::Text("HTTP 404 Not Found: If product does not exist"),
    Block::Heading(3, "Backend Flow:"),
    Block::Numbered(&[
        "@PathVariable int id extracts 1 from URL",
        "Controller calls service.getProductById(1)",
        "Service calls repo.findById(1)",
        "Repository generates: SELECT * FROM product WHERE id = 1",
        "If found: returns Product object → HTTP 200 OK",
        "If NOT found: returns null → HTTP 404 Not Found",
    ]),
    Block::Heading(2, "Endpoint 3: POST /api/product"),
    Block::Heading(3, "Purpose:"),
    Block::Text("Add new product with image"),
    Block::Heading(3, "Request:"),
    Block::Code(
        "POST /api/product HTTP/1.1\nContent-Type: multipart/form-data\n\nFormData:\n- product: { \"name\": \"Laptop\", \"brand\": \"Dell\", \"price\": 79999.99, ... }\n- imageFile: <binary image data>",
    ),
    Block::Heading(3, "Response (HTTP 201 CREATED):"),
    Block::Text("Returns created product with auto-generated ID"),
    Block::Heading(3, "Backend Flow:"),
    Block::Numbered(&[
        "@RequestPart Product product deserializes JSON → Product object",
        "@RequestPart MultipartFile imageFile receives uploaded file",
        "Controller calls service.addProduct(product, imageFile)",
        "Service extracts image metadata and converts to bytes",
        "Service calls repo.save(product)",
        "Repository generates INSERT query",
        "Database assigns auto-generated ID",
        "Returns saved Product with ID",
        "HTTP 201 CREATED response",
    ]),
    Block::Heading(2, "Endpoint 4: GET /api/product/{productId}/image"),
    Block::Heading(3, "Purpose:"),
    Block::Text("Download product image"),
    Block::Heading(3, "Request:"),
    Block::Code("GET /api/product/1/image HTTP/1.1\nHost: localhost:8080"),
    Block::Heading(3, "Response (HTTP 200 OK):"),
    Block::Text("Binary image data with appropriate Content-Type header"),
    Block::Heading(3, "Backend Flow:"),
    Block::Numbered(&[
        "@PathVariable int productId extracts 1 from URL",
        "Controller calls service.getProductById(1)",
        "Service queries database",
        "Controller extracts: product.getImageData() (byte array)",
        "Controller sets HTTP response header: Content-Type: image/jpeg",
        "Returns binary data",
        "Browser displays/downloads image",
    ]),
];

const LIFECYCLE: &[Pair] = &[
    (
        "CLIENT Sends Request",
        "User sends POST /api/product with FormData (product JSON + image file)",
    ),
    (
        "Spring Web Server (Tomcat) Receives Request",
        "Tomcat identifies HTTP Method (POST), URL (/api/product), and body (Multipart form data)",
    ),
    (
        "Spring Dispatcher Maps to Controller",
        r#"Spring finds @PostMapping("/product") in ProductController"#,
    ),
    (
        "Multipart Parser Extracts Data",
        r#"Extracts "product" field (JSON deserized to Product object) and "imageFile" field (MultipartFile wrapper)"#,
    ),
    (
        "Controller Method Executes",
        "ProductController.addProduct(Product, MultipartFile) calls service.addProduct(product, imageFile)",
    ),
    (
        "Service Layer - Business Logic",
        "Extracts filename, content-type, and bytes from file. Sets these on Product. Calls repo.save(product)",
    ),
    (
        "Repository Layer - Database Access",
        "Hibernate generates: INSERT INTO product (name, brand, price, image_name, image_type, image_data, ...) VALUES (...)",
    ),
    (
        "Database Execution",
        "H2 executes INSERT, auto-generates ID, stores row, returns success",
    ),
    (
        "Return Data to Service",
        "Hibernate converts database row to Product Java object with auto-generated ID",
    ),
    (
        "Service Returns to Controller",
        r#"Service returns Product { id: 1, name: "Laptop", brand: "Dell", ... }"#,
    ),
    (
        "Controller Wraps Response",
        "Controller returns ResponseEntity.status(201).body(savedProduct). HTTP Status: 201 CREATED",
    ),
    (
        "Jackson Serializes to JSON",
        "Jackson converts Product object to JSON (imageData excluded by @JsonIgnore)",
    ),
    (
        "HTTP Response Sent to Client",
        "HTTP/1.1 201 Created with JSON body",
    ),
    (
        "Client Receives Response",
        "Frontend receives HTTP Status 201 with created product data",
    ),
];

const REQUEST_PATH: &[&str] = &[
    "HTTP Request",
    "Tomcat (Web Server)",
    "Spring Dispatcher (Router)",
    "Controller (Request Handler)",
    "Service (Business Logic)",
    "Repository (Database Access)",
    "Hibernate (ORM - Object to SQL)",
    "H2 Database (SQL Execution & Storage)",
    "[Data returned back up the chain]",
    "Jackson (Object to JSON)",
    "HTTP Response",
    "Client (Browser/App)",
];

const CONCEPTS: &[Pair] = &[
    ("@RestController", "Handles REST requests"),
    ("@RequestMapping", "URL prefix"),
    ("@GetMapping/@PostMapping", "HTTP method + URL routing"),
    ("@Autowired", "Dependency Injection (automatic wiring)"),
    ("@Entity", "Database table"),
    ("@Id @GeneratedValue", "Primary Key with auto-increment"),
    ("@Lob", "Large binary data (images)"),
    ("@Lazy", "Load data only when needed"),
    ("@JsonIgnore", "Don't include in JSON response"),
    ("JpaRepository", "Pre-built database access methods"),
    ("Service", "Business logic layer"),
    ("DTO", "Data Transfer Object (if needed for specific responses)"),
];

const NEXT_STEPS: &[&str] = &[
    "Add a DELETE endpoint (@DeleteMapping) to remove products",
    "Add an UPDATE endpoint (@PutMapping) to modify products",
    "Add custom search methods in ProductRepo to find products by category/brand",
    "Add category filter to getAllProducts for advanced filtering",
    "Implement pagination using Page<Product> instead of List<Product>",
    "Add data validation using @Valid and validation annotations",
    "Create custom exceptions and error handlers for better error management",
    "Add unit tests for service and controller methods",
    "Implement role-based access control (authentication & authorization)",
    "Add API documentation using Swagger/SpringFox",
];
