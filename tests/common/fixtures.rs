//! Template fixtures shared by scenario and CLI tests.

/// Root template with one function and a table it references
pub const HELLO_TEMPLATE: &str = r#"AWSTemplateFormatVersion: '2010-09-09'
Transform: AWS::Serverless-2016-10-31
Resources:
  HelloFn:
    Type: AWS::Serverless::Function
    Properties:
      Handler: app.handler
      CodeUri: src/hello
      Runtime: nodejs14.x
      Environment:
        Variables:
          TABLE_NAME: !Ref Table
  Table:
    Type: AWS::DynamoDB::Table
Outputs:
  HelloArn:
    Value: !GetAtt HelloFn.Arn
"#;

/// Root template with one local and one remote nested stack
pub const NESTED_ROOT_TEMPLATE: &str = r#"Resources:
  RootFn:
    Type: AWS::Serverless::Function
    Properties:
      Handler: index.handler
      CodeUri: src/root
      Runtime: nodejs12.x
  Inner:
    Type: AWS::CloudFormation::Stack
    Properties:
      TemplateURL: nested/inner.yaml
  Shared:
    Type: AWS::CloudFormation::Stack
    Properties:
      TemplateURL: s3://bucket/key
"#;

/// Nested template referenced from `NESTED_ROOT_TEMPLATE`
pub const INNER_TEMPLATE: &str = r#"Resources:
  InnerFn:
    Type: AWS::Serverless::Function
    Properties:
      Handler: worker.run
      CodeUri: functions
      Runtime: nodejs14.x
  Schema:
    Type: AWS::AppSync::GraphQLSchema
    Properties:
      DefinitionS3Location: schema.graphql
"#;

/// Function without a CodeUri and no global default
pub const MISSING_CODE_URI_TEMPLATE: &str = r#"Resources:
  NoCode:
    Type: AWS::Serverless::Function
    Properties:
      Handler: app.handler
      Runtime: nodejs14.x
"#;

/// Inline-code function next to a compiled one
pub const INLINE_TEMPLATE: &str = r#"Globals:
  Function:
    Runtime: nodejs14.x
Resources:
  Inline:
    Type: AWS::Serverless::Function
    Properties:
      Handler: index.handler
      InlineCode: |
        exports.handler = async () => 'ok';
  Compiled:
    Type: AWS::Serverless::Function
    Properties:
      Handler: app.handler
      CodeUri: src
"#;
