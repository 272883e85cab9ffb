use super::{ScaffoldOperation, TemplateEntry};

const fn dir(path: &'static str) -> ScaffoldOperation {
    ScaffoldOperation::CreateDirectory(path)
}

const fn file(path: &'static str, asset: &'static str) -> ScaffoldOperation {
    ScaffoldOperation::WriteFile { path, asset }
}

const README: ScaffoldOperation = file("README.md", "common/README.md");

/// Every template projy knows about, in the order they are listed to users.
pub static CATALOG: &[TemplateEntry] = &[
    TemplateEntry {
        id: "go",
        summary: "Go module with a cmd/ entry point",
        operations: &[
            README,
            file(".gitignore", "go/gitignore"),
            file("go.mod", "go/go.mod"),
            file("cmd/{{name}}/main.go", "go/main.go"),
            dir("pkg/utils"),
        ],
    },
    TemplateEntry {
        id: "python",
        summary: "Python data project with notebooks and src/",
        operations: &[
            README,
            file(".gitignore", "python/gitignore"),
            file("requirements.txt", "python/requirements.txt"),
            dir("data/raw"),
            dir("data/processed"),
            dir("notebooks"),
            file("notebooks/01-explore.ipynb", "python/01-explore.ipynb"),
            dir("src"),
            file("src/__init__.py", "python/__init__.py"),
            file("src/main.py", "python/main.py"),
            dir("tests"),
        ],
    },
    TemplateEntry {
        id: "node-api",
        summary: "Node.js Express API",
        operations: &[
            README,
            file(".gitignore", "node/gitignore"),
            file("package.json", "node/package.json"),
            file("src/server.js", "node/server.js"),
            dir("src/controllers"),
            dir("src/services"),
            dir("src/routes"),
            dir("src/models"),
        ],
    },
    TemplateEntry {
        id: "react",
        summary: "Next.js app router project",
        operations: &[
            README,
            file(".gitignore", "node/gitignore"),
            file("package.json", "react/package.json"),
            file("next.config.js", "react/next.config.js"),
            file("app/page.js", "react/page.js"),
            file("app/layout.js", "react/layout.js"),
            dir("components"),
            dir("lib"),
        ],
    },
    TemplateEntry {
        id: "java",
        summary: "Spring Boot service built with Maven",
        operations: &[
            README,
            file("pom.xml", "java/pom.xml"),
            file(
                "src/main/java/com/example/{{ident}}/{{Ident}}Application.java",
                "java/Application.java",
            ),
            file(
                "src/main/resources/application.properties",
                "java/application.properties",
            ),
            dir("src/main/java/com/example/{{ident}}/controller"),
            dir("src/main/java/com/example/{{ident}}/service"),
            dir("src/main/java/com/example/{{ident}}/model"),
            dir("src/test/java/com/example/{{ident}}"),
        ],
    },
    TemplateEntry {
        id: "csharp",
        summary: ".NET Web API",
        operations: &[
            README,
            file("{{name}}.csproj", "csharp/project.csproj"),
            file("Program.cs", "csharp/Program.cs"),
            file("appsettings.json", "csharp/appsettings.json"),
            dir("Controllers"),
            dir("Services"),
            dir("Models"),
            dir("Data"),
        ],
    },
    TemplateEntry {
        id: "rust",
        summary: "Rust binary crate",
        operations: &[
            README,
            file(".gitignore", "rust/gitignore"),
            file("Cargo.toml", "rust/Cargo.toml"),
            file("src/main.rs", "rust/main.rs"),
            dir("src/bin"),
            dir("src/lib"),
        ],
    },
    TemplateEntry {
        id: "c",
        summary: "C program with a Makefile",
        operations: &[
            README,
            file(".gitignore", "c/gitignore"),
            file("Makefile", "c/Makefile"),
            file("src/main.c", "c/main.c"),
            dir("include"),
            dir("bin"),
        ],
    },
    TemplateEntry {
        id: "cpp",
        summary: "C++17 program with a Makefile",
        operations: &[
            README,
            file(".gitignore", "c/gitignore"),
            file("Makefile", "cpp/Makefile"),
            file("src/main.cpp", "cpp/main.cpp"),
            dir("include"),
            dir("bin"),
        ],
    },
];
