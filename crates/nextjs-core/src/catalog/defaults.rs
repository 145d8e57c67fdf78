//! Built-in catalog used when no `config.json` is available

use super::{Catalog, Component, ComponentFile, FileKind, Repository, User};

fn file(path: &str, content: &str) -> ComponentFile {
    ComponentFile {
        path: path.to_string(),
        kind: FileKind::File,
        content: content.to_string(),
    }
}

pub fn builtin_catalog() -> Catalog {
    Catalog {
        repositories: vec![
            Repository {
                name: "NextJS Clean".to_string(),
                url: "https://github.com/vercel/next-learn-starter".to_string(),
                description: "A minimal, clean NextJS template".to_string(),
                is_private: false,
                requires_auth: false,
            },
            Repository {
                name: "NextJS Advanced (Private)".to_string(),
                url: "https://github.com/your-org/nextjs-advanced-template".to_string(),
                description: "Advanced NextJS template with auth, database and more".to_string(),
                is_private: true,
                requires_auth: true,
            },
        ],
        users: vec![
            User {
                id: "1".to_string(),
                username: "admin".to_string(),
                email: "admin@example.com".to_string(),
                has_private_access: true,
                github_token: Some("ghp_your_private_token_here".to_string()),
            },
            User {
                id: "2".to_string(),
                username: "user1".to_string(),
                email: "user1@example.com".to_string(),
                has_private_access: false,
                github_token: None,
            },
            User {
                id: "3".to_string(),
                username: "developer".to_string(),
                email: "dev@example.com".to_string(),
                has_private_access: true,
                github_token: Some("ghp_another_private_token".to_string()),
            },
        ],
        components: builtin_components(),
    }
}

fn builtin_components() -> Vec<Component> {
    vec![
        Component {
            name: "nextjs-clean".to_string(),
            display_name: "NextJS Clean Setup".to_string(),
            description: "Clean NextJS configuration with TypeScript and Tailwind CSS".to_string(),
            category: "setup".to_string(),
            is_private: false,
            requires_auth: false,
            dependencies: vec![
                "tailwindcss".to_string(),
                "@types/node".to_string(),
                "@types/react".to_string(),
                "@types/react-dom".to_string(),
            ],
            dev_dependencies: vec!["autoprefixer".to_string(), "postcss".to_string()],
            files: vec![
                file(
                    "tailwind.config.js",
                    r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    './pages/**/*.{js,ts,jsx,tsx,mdx}',
    './components/**/*.{js,ts,jsx,tsx,mdx}',
    './app/**/*.{js,ts,jsx,tsx,mdx}',
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#,
                ),
                file(
                    "postcss.config.js",
                    r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#,
                ),
                file(
                    "app/globals.css",
                    r#"@tailwind base;
@tailwind components;
@tailwind utilities;

:root {
  --foreground-rgb: 0, 0, 0;
  --background-rgb: 255, 255, 255;
}

@media (prefers-color-scheme: dark) {
  :root {
    --foreground-rgb: 255, 255, 255;
    --background-rgb: 0, 0, 0;
  }
}

body {
  color: rgb(var(--foreground-rgb));
  background: rgb(var(--background-rgb));
}
"#,
                ),
            ],
        },
        Component {
            name: "auth-system".to_string(),
            display_name: "Authentication System".to_string(),
            description: "Complete authentication setup with NextAuth.js".to_string(),
            category: "auth".to_string(),
            is_private: true,
            requires_auth: true,
            dependencies: vec![
                "next-auth".to_string(),
                "@next-auth/prisma-adapter".to_string(),
                "prisma".to_string(),
            ],
            dev_dependencies: vec!["@types/bcryptjs".to_string()],
            files: vec![file(
                "lib/auth.ts",
                r#"import { NextAuthOptions } from 'next-auth'
import CredentialsProvider from 'next-auth/providers/credentials'

export const authOptions: NextAuthOptions = {
  providers: [
    CredentialsProvider({
      name: 'credentials',
      credentials: {
        email: { label: 'Email', type: 'email' },
        password: { label: 'Password', type: 'password' }
      },
      async authorize(credentials) {
        // Implement your authentication logic here
        return null
      }
    })
  ],
  pages: {
    signIn: '/auth/signin',
  },
  session: {
    strategy: 'jwt'
  }
}
"#,
            )],
        },
        Component {
            name: "ui-components".to_string(),
            display_name: "UI Components Pack".to_string(),
            description: "Reusable UI components built on Tailwind CSS".to_string(),
            category: "ui".to_string(),
            is_private: false,
            requires_auth: false,
            dependencies: vec!["clsx".to_string(), "tailwind-merge".to_string()],
            dev_dependencies: vec![],
            files: vec![
                file(
                    "components/ui/Button.tsx",
                    r#"import { ButtonHTMLAttributes, forwardRef } from 'react'
import { clsx } from 'clsx'

interface ButtonProps extends ButtonHTMLAttributes<HTMLButtonElement> {
  variant?: 'primary' | 'secondary' | 'outline'
}

const Button = forwardRef<HTMLButtonElement, ButtonProps>(
  ({ className, variant = 'primary', ...props }, ref) => {
    return (
      <button
        className={clsx(
          'inline-flex items-center justify-center rounded-md font-medium transition-colors',
          {
            'bg-blue-600 text-white hover:bg-blue-700': variant === 'primary',
            'bg-gray-600 text-white hover:bg-gray-700': variant === 'secondary',
            'border border-gray-300 bg-transparent hover:bg-gray-50': variant === 'outline',
          },
          className
        )}
        ref={ref}
        {...props}
      />
    )
  }
)

Button.displayName = 'Button'

export default Button
"#,
                ),
                file(
                    "lib/utils.ts",
                    r#"import { clsx, type ClassValue } from 'clsx'
import { twMerge } from 'tailwind-merge'

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs))
}
"#,
                ),
            ],
        },
        Component {
            name: "database-setup".to_string(),
            display_name: "Database Setup (Prisma)".to_string(),
            description: "Database configuration with Prisma and PostgreSQL".to_string(),
            category: "database".to_string(),
            is_private: true,
            requires_auth: true,
            dependencies: vec!["prisma".to_string(), "@prisma/client".to_string()],
            dev_dependencies: vec!["prisma".to_string()],
            files: vec![
                file(
                    "prisma/schema.prisma",
                    r#"generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model User {
  id        String   @id @default(cuid())
  email     String   @unique
  name      String?
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt

  @@map("users")
}
"#,
                ),
                file(
                    "lib/prisma.ts",
                    r#"import { PrismaClient } from '@prisma/client'

const globalForPrisma = globalThis as unknown as {
  prisma: PrismaClient | undefined
}

export const prisma = globalForPrisma.prisma ?? new PrismaClient()

if (process.env.NODE_ENV !== 'production') globalForPrisma.prisma = prisma
"#,
                ),
            ],
        },
    ]
}
